//! The success-or-failure algebra.
//!
//! An [`Outcome<T, E>`] is either `Success(T)` or `Failure(E)`. Unlike
//! [`Maybe`](crate::Maybe) there is no classifying constructor: callers
//! pick the variant with [`success`] or [`failure`], and [`Outcome::map`]
//! never re-classifies its output.
//!
//! `E` is opaque to the algebra. It is whatever domain error the caller
//! wants to carry as a value.

/// The outcome of an operation that may fail with a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),

    /// The operation failed with an error.
    Failure(E),
}

/// Wrap a successful value.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap a failure.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, or `default` on failure. The error is dropped.
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success value, or a value recovered from the error.
    pub fn get_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    /// Keep a success; hand a failure to `handler`, which decides the next
    /// outcome and may change the error type.
    pub fn or_else<F, H>(self, handler: H) -> Outcome<T, F>
    where
        H: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => handler(error),
        }
    }

    /// Alias of [`or_else`](Self::or_else).
    pub fn catch<F, H>(self, handler: H) -> Outcome<T, F>
    where
        H: FnOnce(E) -> Outcome<T, F>,
    {
        self.or_else(handler)
    }

    /// Transform the success value. Always stays `Success`.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error. A success passes through untouched.
    pub fn map_err<F, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a step that may itself fail with the same error type.
    ///
    /// Equivalent to `self.map(f).flatten()`.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`flat_map`](Self::flat_map).
    pub fn then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Two-armed exhaustive match. Exactly one arm runs.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Observe the success value without changing `self`.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the error without changing `self`.
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Borrow both payloads: `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success value, if any.
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error, if any.
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Leave the algebra for a native `Result`, e.g. to use `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting. An inner failure surfaces as the
    /// outer result.
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
