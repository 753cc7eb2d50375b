//! Future wrappers that classify panics instead of propagating them.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{err, ok, CaughtError, SafeOutcome};

/// Safely invokes an asynchronous callable, resolving its future inside a
/// panic boundary.
///
/// A panic in the callable itself (before any await) and a panic while the
/// future is being polled are both caught and classified; the adapter
/// settles to a [`SafeOutcome`] either way.
///
/// # Examples
///
/// ```rust,no_run
/// use safecall::prelude_async::*;
///
/// async fn read_header(buf: &[u8]) -> u32 {
///     u32::from_be_bytes(buf[..4].try_into().unwrap())
/// }
///
/// async fn example(buf: &[u8]) {
///     // A short buffer panics inside read_header; the boundary catches it.
///     let r = safe_async(|| read_header(buf)).await;
///     if let Some(e) = r.error() {
///         eprintln!("header rejected: {e}");
///     }
/// }
/// ```
pub async fn safe_async<F, Fut>(f: F) -> SafeOutcome<Fut::Output>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => SafeFuture::new(future).await,
        Err(payload) => err(CaughtError::from_payload(payload)),
    }
}

pin_project! {
    /// A future wrapper that polls its inner future inside a panic boundary.
    ///
    /// Resolves to a [`SafeOutcome`]: the inner future's output on normal
    /// completion, a classified [`CaughtError`] if a poll panicked.
    ///
    /// The wrapper is fused: after it has produced an output it panics if
    /// polled again, which also fences off the inner future (a future that
    /// panicked mid-poll is not safe to poll again).
    #[must_use = "futures do nothing unless polled"]
    pub struct SafeFuture<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> SafeFuture<Fut> {
    /// Wraps a future in a panic boundary.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut: Future> Future for SafeFuture<Fut> {
    type Output = SafeOutcome<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "SafeFuture polled after completion; this is a bug");

        match panic::catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.done = true;
                Poll::Ready(ok(value))
            }
            Err(payload) => {
                *this.done = true;
                Poll::Ready(err(CaughtError::from_payload(payload)))
            }
        }
    }
}

impl<Fut: Future> FusedFuture for SafeFuture<Fut> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

pin_project! {
    /// Panic boundary for futures that already resolve to a `Result`.
    ///
    /// Rust's native rejection is an `Err` output; this wrapper funnels that
    /// rejection and any panic through the same classification, so the
    /// caller always sees a [`SafeOutcome`] with an Error-like failure. The
    /// rejected error keeps its identity and can be recovered with
    /// [`CaughtError::downcast_ref`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TrySafeFuture<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> TrySafeFuture<Fut> {
    /// Wraps a fallible future in a panic boundary.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut, T, E> Future for TrySafeFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: core::error::Error + Send + Sync + 'static,
{
    type Output = SafeOutcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "TrySafeFuture polled after completion; this is a bug");

        match panic::catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => {
                *this.done = true;
                Poll::Ready(ok(value))
            }
            Ok(Poll::Ready(Err(error))) => {
                *this.done = true;
                Poll::Ready(err(CaughtError::Error(Box::new(error))))
            }
            Err(payload) => {
                *this.done = true;
                Poll::Ready(err(CaughtError::from_payload(payload)))
            }
        }
    }
}

impl<Fut, T, E> FusedFuture for TrySafeFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: core::error::Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Extension trait wrapping any future in a [`SafeFuture`].
///
/// # Examples
///
/// ```rust,no_run
/// use safecall::prelude_async::*;
///
/// async fn example() {
///     let r = async { 21 * 2 }.safe().await;
///     assert_eq!(r.value(), Some(&42));
/// }
/// ```
pub trait SafeFutureExt: Future + Sized {
    /// Wraps this future in a panic boundary.
    fn safe(self) -> SafeFuture<Self>;
}

impl<Fut: Future> SafeFutureExt for Fut {
    #[inline]
    fn safe(self) -> SafeFuture<Self> {
        SafeFuture::new(self)
    }
}

/// Extension trait wrapping a fallible future in a [`TrySafeFuture`].
///
/// # Examples
///
/// ```rust,no_run
/// use safecall::prelude_async::*;
///
/// async fn fetch() -> Result<String, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::Other, "net"))
/// }
///
/// async fn example() {
///     let r = fetch().try_safe().await;
///     assert!(r.error().unwrap().is::<std::io::Error>());
/// }
/// ```
pub trait SafeTryFutureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Funnels this future's rejection and any panic into one boundary.
    fn try_safe(self) -> TrySafeFuture<Self>;
}

impl<Fut, T, E> SafeTryFutureExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn try_safe(self) -> TrySafeFuture<Self> {
        TrySafeFuture::new(self)
    }
}
