//! Async prelude - the sync prelude plus every async boundary in one import.
//!
//! # Examples
//!
//! ```rust,no_run
//! use safecall::prelude_async::*;
//!
//! async fn fetch(url: &str) -> String {
//!     // pretend this talks to the network and may panic
//!     url.to_uppercase()
//! }
//!
//! async fn example() {
//!     let r: SafeOutcome<String> = safe_async(|| fetch("https://example.com")).await;
//!     assert!(r.is_ok());
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{
    safe_async, SafeFuture, SafeFutureExt, SafeTryFutureExt, TrySafeFuture,
};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::tokio_ext::{safe_join, safe_spawn};
