//! Tokio task boundaries.
//!
//! `tokio::spawn` already catches a task's panic and reports it through
//! [`JoinError`]; these adapters recover that payload and push it through the
//! same classification as a local panic. An aborted task is an ordinary
//! rejection: its `JoinError` is itself Error-like and passes through as
//! [`CaughtError::Error`].

use core::future::Future;

use tokio::task::{JoinError, JoinHandle};

use crate::types::{err, ok, CaughtError, SafeOutcome};

/// Awaits a join handle, classifying panic and abort failures.
///
/// # Examples
///
/// ```rust,no_run
/// use safecall::prelude_async::*;
///
/// async fn example() {
///     let handle = tokio::spawn(async { "done" });
///     let r = safe_join(handle).await;
///     assert_eq!(r.value(), Some(&"done"));
/// }
/// ```
pub async fn safe_join<T>(handle: JoinHandle<T>) -> SafeOutcome<T> {
    match handle.await {
        Ok(value) => ok(value),
        Err(join_error) => err(classify_join(join_error)),
    }
}

/// Spawns a future on the Tokio runtime and awaits it safely.
///
/// Equivalent to `safe_join(tokio::spawn(future))`.
///
/// # Examples
///
/// ```rust,no_run
/// use safecall::prelude_async::*;
///
/// async fn example() {
///     let r = safe_spawn(async { assert_eq!(1 + 1, 3) }).await;
///     assert!(r.is_err());
/// }
/// ```
pub async fn safe_spawn<Fut>(future: Fut) -> SafeOutcome<Fut::Output>
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    safe_join(tokio::spawn(future)).await
}

fn classify_join(join_error: JoinError) -> CaughtError {
    if join_error.is_panic() {
        // Recover the task's original panic payload.
        CaughtError::from_payload(join_error.into_panic())
    } else {
        CaughtError::Error(Box::new(join_error))
    }
}
