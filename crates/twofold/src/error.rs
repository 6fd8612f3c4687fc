//! Error types for terminal extraction.
//!
//! The combinators never fail. The only fallible step is leaving the
//! algebra for code that propagates with `?`.

/// Returned by [`Maybe::require`](crate::Maybe::require) when there is no
/// value to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("expected a present value, found absent")]
pub struct AbsentValue;
