//! Tests for the Tokio task boundaries.

use std::error::Error;
use std::io;

use safecall::prelude_async::*;
use tokio::task::JoinError;

#[tokio::test]
async fn safe_spawn_returns_the_task_value() {
    let r = safe_spawn(async { "done" }).await;
    assert_eq!(r.value(), Some(&"done"));
}

#[tokio::test]
async fn safe_spawn_classifies_a_task_panic() {
    let r = safe_spawn(async {
        tokio::task::yield_now().await;
        panic!("boom")
    })
    .await;

    let Some(CaughtError::NonError(n)) = r.error() else {
        panic!("expected NonError");
    };
    assert_eq!(n.cause_str(), Some("boom"));
}

#[tokio::test]
async fn safe_spawn_recovers_error_like_task_payloads() {
    let r = safe_spawn(async {
        let e: Box<dyn Error + Send + Sync> = io::Error::new(io::ErrorKind::Other, "net").into();
        std::panic::panic_any(e)
    })
    .await;

    let caught = r.into_error().unwrap();
    assert!(caught.is::<io::Error>());
    assert_eq!(caught.to_string(), "net");
}

#[tokio::test]
async fn safe_join_reports_an_abort_as_an_error_like_rejection() {
    let handle = tokio::spawn(std::future::pending::<()>());
    handle.abort();

    let r = safe_join(handle).await;
    let caught = r.into_error().unwrap();
    let join_error = caught.downcast_ref::<JoinError>().expect("abort should surface the JoinError");
    assert!(join_error.is_cancelled());
}
