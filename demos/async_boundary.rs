//! Async boundaries over tasks and futures.
//!
//! Run with: `cargo run --example async_boundary --features async-tokio`

use safecall::prelude_async::*;

async fn fetch_len(url: &str) -> usize {
    assert!(url.starts_with("https://"), "insecure scheme");
    url.len()
}

#[tokio::main]
async fn main() {
    // The whole call, including every poll, runs inside the boundary.
    let r = safe_async(|| fetch_len("https://example.com")).await;
    println!("fetched: {:?}", r.value());

    let r = safe_async(|| fetch_len("http://example.com")).await;
    println!("rejected: {:?}", r.error().map(|e| e.to_string()));

    // Task panics come back through the same classification.
    let r = safe_spawn(async {
        tokio::task::yield_now().await;
        panic!("worker died")
    })
    .await;
    match r.into_error() {
        Some(CaughtError::NonError(n)) => println!("task failed: {:?}", n.cause_str()),
        Some(other) => println!("task failed: {other}"),
        None => unreachable!(),
    }
}
