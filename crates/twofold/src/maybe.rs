//! The optional-value algebra.
//!
//! A [`Maybe<T>`] is either `Present(T)` or `Absent`. Values enter through
//! the smart constructor [`of`], which classifies a native `Option`:
//! `None` is the only absence sentinel, so `Some(0)`, `Some(false)` and
//! `Some(Vec::new())` are all present.
//!
//! ```text
//! of(raw) ──► Present(v) ──map/flat_map/tap──► ... ──get_or/fold──► R
//!        └──► Absent ─────or_else──────────────► ...
//! ```
//!
//! Every combinator consumes `self` and returns a new value; nothing is
//! mutated in place. Use [`Maybe::as_ref`] to run combinators over a
//! shared instance without giving it up.

use crate::error::AbsentValue;

/// A value that may or may not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Holds exactly one value, fixed at construction.
    Present(T),

    /// Carries no payload.
    Absent,
}

/// Classify a native optional: `None` becomes `Absent`, anything else
/// becomes `Present`.
pub fn of<T>(raw: Option<T>) -> Maybe<T> {
    Maybe::of(raw)
}

/// Wrap a value already known to exist.
pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// The empty case, for call sites that already know there is no value.
pub fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    /// Smart constructor. See [`of`].
    pub fn of(raw: Option<T>) -> Self {
        match raw {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Direct constructor for the empty case.
    pub fn absent() -> Self {
        Self::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The held value, or `default` when absent.
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// The held value, or the result of `fallback` when absent.
    ///
    /// `fallback` runs only on the absent path.
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Keep `self` when present, otherwise switch to the `Maybe` produced
    /// by `fallback`.
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => fallback(),
        }
    }

    /// Transform the held value.
    ///
    /// A non-optional `U` can never be the absence sentinel, so the
    /// re-classification always lands on `Present`. Use
    /// [`map_nullable`](Self::map_nullable) when the mapper may itself
    /// signal absence.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transform the held value and re-classify the result with [`of`].
    ///
    /// A mapper returning `None` collapses `Present` into `Absent`, which
    /// lets the mapper act as a filter:
    ///
    /// ```
    /// use twofold::maybe;
    ///
    /// let even = maybe::present(3).map_nullable(|n| (n % 2 == 0).then_some(n));
    /// assert!(even.is_absent());
    /// ```
    pub fn map_nullable<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Maybe::of(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chain a step that may itself produce no value.
    ///
    /// Equivalent to `self.map(f).flatten()`.
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Two-armed exhaustive match. Exactly one arm runs.
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Observe the held value without changing `self`.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Borrow the payload: `&Maybe<T>` to `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Leave the algebra for a native `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Extract the held value, reporting absence as an error so callers
    /// can propagate with `?`.
    pub fn require(self) -> Result<T, AbsentValue> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValue),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(raw: Option<T>) -> Self {
        Self::of(raw)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
