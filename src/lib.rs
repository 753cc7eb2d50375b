//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `safecall::*` or pick focused pieces as needed.
//!
//! `safecall` replaces control-flow-by-panic with an explicit success/failure
//! container, [`Outcome`], plus a small set of adapters that invoke arbitrary
//! callables inside a panic boundary and hand the caller an `Outcome` instead
//! of unwinding. Whatever the callable panicked with is classified: Error-like
//! payloads pass through with identity preserved, everything else is
//! normalized into a [`NonError`].
//!
//! # Examples
//!
//! ## Explicit outcomes instead of unwinding
//!
//! ```
//! use safecall::{safe_sync, CaughtError};
//!
//! let r = safe_sync(|| "127.0.0.1:8080".parse::<std::net::SocketAddr>().unwrap());
//! assert!(r.is_ok());
//!
//! let r = safe_sync(|| -> u32 { panic!("boom") });
//! match r.error() {
//!     Some(CaughtError::NonError(n)) => assert_eq!(n.cause_str(), Some("boom")),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Bridging back with `must`
//!
//! ```
//! use safecall::{ok, Outcome};
//!
//! let r: Outcome<&str, std::io::Error> = ok("hello");
//! assert_eq!(r.must(), "hello");
//! ```
//!
//! ## Degraded success
//!
//! ```
//! use safecall::err_with;
//!
//! // A partial value can ride along with the error that interrupted it.
//! let r = err_with(vec![1, 2], "source truncated");
//! assert!(r.is_err());
//! assert_eq!(r.value(), Some(&vec![1, 2]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and `core::result::Result`
pub mod convert;
/// The `safe!` macro for wrapping expressions in a panic boundary
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `ErrorLike` capability and payload classification predicate
pub mod traits;
/// Outcome container, NonError wrapper, and classified failures
pub mod types;

/// Synchronous panic boundaries: `safe_new` and `safe_sync` (requires `std` feature)
#[cfg(feature = "std")]
pub mod safe;

/// Async panic boundary: `safe_async` and future wrappers (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::IntoOutcome;
pub use traits::ErrorLike;
pub use types::{err, err_with, ok, Outcome};

#[cfg(feature = "std")]
pub use safe::{safe_new, safe_sync};
#[cfg(feature = "std")]
pub use types::{is_error_like, CaughtError, NonError, SafeOutcome};

#[cfg(feature = "async")]
pub use async_ext::{safe_async, SafeFuture, SafeFutureExt, SafeTryFutureExt, TrySafeFuture};

#[cfg(feature = "async-tokio")]
pub use async_ext::tokio_ext::{safe_join, safe_spawn};
