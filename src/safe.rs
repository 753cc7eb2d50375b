//! Synchronous panic boundaries.
//!
//! Both adapters run the callable to completion on the caller's thread inside
//! [`std::panic::catch_unwind`] and never let a panic escape: normal
//! completion becomes [`ok`](crate::ok), a caught payload is classified by
//! [`CaughtError::from_payload`] and becomes [`err`](crate::err). Arguments
//! are captured by the closure, the Rust spelling of the original variadic
//! call.
//!
//! # Unwind safety
//!
//! The boundary wraps the callable in [`AssertUnwindSafe`], the same policy
//! as `tokio::spawn`. If the callable mutates state shared with the caller
//! and then panics, that state may be left partially updated; the caller
//! keeps the obligation not to observe broken invariants afterwards.
//!
//! # Panic hook
//!
//! `catch_unwind` does not suppress the global panic hook, so a caught panic
//! may still print a message and backtrace to stderr. Hook management is the
//! host application's concern, not this library's.

use std::panic::{self, AssertUnwindSafe};

use crate::types::{err, ok, CaughtError, SafeOutcome};

/// Safely invokes a constructor, returning a [`SafeOutcome`] with the new
/// instance.
///
/// In Rust, construction is an ordinary call; this entry point exists for
/// surface parity with call sites that read as constructor invocations.
///
/// # Examples
///
/// ```
/// use safecall::safe_new;
///
/// let r = safe_new(|| String::from("https://example.com"));
/// assert_eq!(r.value().map(String::as_str), Some("https://example.com"));
/// ```
#[inline]
pub fn safe_new<F, R>(ctor: F) -> SafeOutcome<R>
where
    F: FnOnce() -> R,
{
    boundary(ctor)
}

/// Safely invokes a synchronous callable, returning a [`SafeOutcome`].
///
/// # Examples
///
/// ```
/// use safecall::{safe_sync, CaughtError};
///
/// let r = safe_sync(|| "8080".parse::<u16>().unwrap());
/// assert_eq!(r.value(), Some(&8080));
///
/// let r = safe_sync(|| -> u32 { panic!("boom") });
/// let Some(CaughtError::NonError(n)) = r.error() else { unreachable!() };
/// assert_eq!(n.cause_str(), Some("boom"));
/// ```
#[inline]
pub fn safe_sync<F, R>(f: F) -> SafeOutcome<R>
where
    F: FnOnce() -> R,
{
    boundary(f)
}

pub(crate) fn boundary<F, R>(f: F) -> SafeOutcome<R>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => ok(value),
        Err(payload) => err(CaughtError::from_payload(payload)),
    }
}
