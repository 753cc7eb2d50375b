//! Normalization wrapper for non-Error-like panic payloads.

use core::any::Any;
use core::fmt;

use crate::types::alloc_type::Box;

/// Error-like wrapper around a panic payload that did not itself satisfy the
/// Error-like capability.
///
/// The original payload is kept verbatim in [`cause`](NonError::cause) — no
/// conversion, no truncation. Name and message are fixed so callers can
/// recognize the normalization without inspecting the payload:
///
/// ```
/// use safecall::{safe_sync, CaughtError, ErrorLike, NonError};
///
/// let r = safe_sync(|| -> () { panic!("boom") });
/// let Some(CaughtError::NonError(n)) = r.error() else { unreachable!() };
/// assert_eq!(n.name(), NonError::NAME);
/// assert_eq!(n.message(), NonError::MESSAGE);
/// assert_eq!(n.cause_str(), Some("boom"));
/// ```
///
/// A `NonError` is only ever constructed inside a safe adapter's boundary;
/// its lifetime matches the [`Outcome`](crate::Outcome) that carries it.
pub struct NonError {
    cause: Box<dyn Any + Send>,
}

impl NonError {
    /// The fixed `name()` of every `NonError`.
    pub const NAME: &'static str = "NonError";

    /// The fixed `message()` of every `NonError`.
    pub const MESSAGE: &'static str = "Non-Error thrown";

    /// Wraps a panic payload.
    #[inline]
    pub fn new(cause: Box<dyn Any + Send>) -> Self {
        Self { cause }
    }

    /// Returns the original payload.
    #[inline]
    pub fn cause(&self) -> &(dyn Any + Send) {
        &*self.cause
    }

    /// Returns the payload as a string slice when it is one.
    ///
    /// Ordinary `panic!("...")` payloads are `&'static str` or `String`;
    /// both are covered here.
    pub fn cause_str(&self) -> Option<&str> {
        if let Some(s) = self.cause.downcast_ref::<&'static str>() {
            return Some(s);
        }
        self.cause
            .downcast_ref::<crate::types::alloc_type::String>()
            .map(|s| s.as_str())
    }

    /// Consumes the wrapper, returning the original payload verbatim.
    #[inline]
    pub fn into_cause(self) -> Box<dyn Any + Send> {
        self.cause
    }
}

impl fmt::Display for NonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl fmt::Debug for NonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(Self::NAME);
        match self.cause_str() {
            Some(cause) => s.field("cause", &cause).finish(),
            None => s.field("cause", &"<non-string payload>").finish(),
        }
    }
}

impl core::error::Error for NonError {}
