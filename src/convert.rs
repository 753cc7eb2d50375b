//! Conversions between [`Outcome`] and `core::result::Result`.
//!
//! `Outcome` is the richer shape (its failure side may carry a partial
//! value), so the two directions are asymmetric:
//! [`IntoOutcome::into_outcome`] is lossless while
//! [`Outcome::into_result`](crate::Outcome::into_result) drops a partial
//! value.

use crate::types::{err, ok, Outcome};

/// Extension trait converting a `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use safecall::IntoOutcome;
///
/// let r = "8080".parse::<u16>().into_outcome();
/// assert_eq!(r.value(), Some(&8080));
///
/// let r = "x".parse::<u16>().into_outcome();
/// assert!(r.is_err());
/// ```
pub trait IntoOutcome<V, E> {
    /// Maps `Ok` to a success outcome and `Err` to a failure outcome.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        match self {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }
}
