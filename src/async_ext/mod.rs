//! Async panic boundary.
//!
//! [`safe_async`] mirrors [`safe_sync`](crate::safe_sync) for callables that
//! produce a future: the call itself and every poll of the resulting future
//! run inside a panic boundary, and the adapter settles to a
//! [`SafeOutcome`](crate::SafeOutcome) instead of unwinding. There is exactly
//! one suspension point - waiting for the wrapped future - and scheduling
//! between invocation and settlement belongs to the host executor, not this
//! library.
//!
//! Cancellation is not modelled here: if the host's async machinery cancels
//! the wrapped work (a dropped future, an aborted task), whatever failure the
//! caller observes goes through the same classify-and-wrap path as any other
//! rejection. Timeouts are the caller's to compose around the input future.

pub mod safe_future;

#[cfg(feature = "async-tokio")]
pub mod tokio_ext;

pub use safe_future::{safe_async, SafeFuture, SafeFutureExt, SafeTryFutureExt, TrySafeFuture};
