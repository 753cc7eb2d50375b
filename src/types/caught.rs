//! Classified panic payloads.
//!
//! Every safe adapter funnels a caught payload through
//! [`CaughtError::from_payload`]: payloads that satisfy the Error-like
//! capability pass through with identity preserved, everything else is
//! normalized into a [`NonError`]. The `err` side of a
//! [`SafeOutcome`](crate::SafeOutcome) is therefore always Error-like,
//! regardless of what was panicked with.

use core::any::Any;
use core::error::Error;
use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::NonError;

/// A panic payload after classification.
///
/// # Identity
///
/// The `Error` variant holds the exact box the callable panicked with; use
/// [`downcast_ref`](CaughtError::downcast_ref) or
/// [`downcast`](CaughtError::downcast) to recover the concrete error type.
/// The `NonError` variant keeps the original payload verbatim in its cause.
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use safecall::{safe_sync, CaughtError};
///
/// let e: Box<dyn Error + Send + Sync> =
///     std::io::Error::new(std::io::ErrorKind::Other, "some").into();
/// let r = safe_sync(|| -> () { std::panic::panic_any(e) });
///
/// let caught = r.into_error().unwrap();
/// assert!(caught.is::<std::io::Error>());
/// assert_eq!(caught.to_string(), "some");
/// ```
#[derive(Debug)]
pub enum CaughtError {
    /// An Error-like payload, passed through unchanged.
    Error(Box<dyn Error + Send + Sync>),
    /// A non-Error-like payload, normalized.
    NonError(NonError),
}

/// Returns `true` if a panic payload satisfies the Error-like capability.
///
/// The canonical form is a boxed `dyn Error + Send + Sync` (what
/// `panic_any(Box::<dyn Error + Send + Sync>::from(e))` produces). Payloads
/// that are already a [`CaughtError`] or [`NonError`] — a re-caught
/// [`must`](crate::Outcome::must), typically — also count, so re-entering a
/// boundary never double-wraps.
pub fn is_error_like(payload: &(dyn Any + Send)) -> bool {
    payload.is::<CaughtError>()
        || payload.is::<NonError>()
        || payload.is::<Box<dyn Error + Send + Sync>>()
}

impl CaughtError {
    /// Classifies a panic payload.
    ///
    /// This is the single classify-and-wrap step shared by all safe
    /// adapters; it is public so callers running their own
    /// [`catch_unwind`](std::panic::catch_unwind) can reuse it.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let caught = Self::classify(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            error_like = matches!(caught, CaughtError::Error(_)),
            "caught panic payload"
        );
        caught
    }

    fn classify(payload: Box<dyn Any + Send>) -> Self {
        // Already-classified payloads pass through untouched.
        let payload = match payload.downcast::<CaughtError>() {
            Ok(caught) => return *caught,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<NonError>() {
            Ok(non_error) => return CaughtError::NonError(*non_error),
            Err(payload) => payload,
        };
        match payload.downcast::<Box<dyn Error + Send + Sync>>() {
            Ok(error) => CaughtError::Error(*error),
            Err(payload) => CaughtError::NonError(NonError::new(payload)),
        }
    }

    /// Returns `true` if the payload was Error-like and is of type `T`.
    #[inline]
    pub fn is<T: Error + 'static>(&self) -> bool {
        match self {
            CaughtError::Error(error) => error.is::<T>(),
            CaughtError::NonError(_) => false,
        }
    }

    /// Returns a reference to the inner error if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        match self {
            CaughtError::Error(error) => error.downcast_ref(),
            CaughtError::NonError(_) => None,
        }
    }

    /// Attempts to take back the inner error as its concrete type.
    ///
    /// The `NonError` variant never downcasts here; use
    /// [`NonError::cause`] to inspect its payload instead.
    pub fn downcast<T: Error + 'static>(self) -> Result<Box<T>, Self> {
        match self {
            CaughtError::Error(error) => error.downcast().map_err(CaughtError::Error),
            other @ CaughtError::NonError(_) => Err(other),
        }
    }

    /// Consumes the classification, reconstructing the panic payload.
    ///
    /// For the `NonError` variant this is the original payload verbatim.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        match self {
            CaughtError::Error(error) => Box::new(error),
            CaughtError::NonError(non_error) => non_error.into_cause(),
        }
    }

    /// Re-raises the original panic payload, continuing the unwind this
    /// boundary interrupted.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.into_payload())
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaughtError::Error(error) => fmt::Display::fmt(error, f),
            CaughtError::NonError(non_error) => fmt::Display::fmt(non_error, f),
        }
    }
}

impl Error for CaughtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CaughtError::Error(error) => Some(&**error),
            CaughtError::NonError(non_error) => Some(non_error),
        }
    }
}
