//! # Twofold
//!
//! Two closed sum types and a uniform set of combinators for composing
//! "value or absence" and "value or error" without null checks or
//! exception-driven control flow.
//!
//! The two algebras are independent leaves. They share method names, not
//! a base trait.
//!
//! ```text
//! Maybe<T>         ← Present(T) | Absent       (classified from Option<T>)
//! Outcome<T, E>    ← Success(T) | Failure(E)   (variant chosen by caller)
//!     │
//!     ├─ extract    get_or, get_or_else, fold
//!     ├─ recover    or_else
//!     ├─ transform  map, map_err, flat_map, flatten
//!     └─ observe    tap, tap_error
//! ```
//!
//! ```
//! use twofold::{maybe, outcome};
//!
//! let doubled = maybe::of(None)
//!     .or_else(|| maybe::of(Some(42)))
//!     .map(|x| x * 2)
//!     .get_or(-1);
//! assert_eq!(doubled, 84);
//!
//! let recovered = outcome::failure::<usize, _>("bad")
//!     .or_else(|e: &str| outcome::success::<_, ()>(e.len()))
//!     .get_or(0);
//! assert_eq!(recovered, 3);
//! ```
//!
//! Instances are immutable once built; every combinator returns a new
//! value. Both types are `Send` and `Sync` whenever their payloads are.

pub mod error;
pub mod maybe;
pub mod outcome;

pub use error::AbsentValue;
pub use maybe::Maybe;
pub use outcome::Outcome;
