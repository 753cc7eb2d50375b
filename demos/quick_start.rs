//! Minimal tour of the synchronous surface.
//!
//! Run with: `cargo run --example quick_start`

use safecall::prelude::*;

fn parse_port(raw: &str) -> u16 {
    raw.parse().expect("port must be a number")
}

fn main() {
    // Normal completion becomes an Ok outcome.
    let r = safe_sync(|| parse_port("8080"));
    println!("parsed: {:?}", r.value());

    // A panic becomes a classified failure instead of unwinding.
    let r = safe_sync(|| parse_port("not-a-port"));
    match r.error() {
        Some(CaughtError::NonError(n)) => {
            println!("rejected: {} (cause: {:?})", n.message(), n.cause_str())
        }
        Some(other) => println!("rejected: {other}"),
        None => unreachable!(),
    }

    // The safe! macro reads as an annotation at the call site.
    let nums = vec![1, 2, 3];
    println!("in bounds: {:?}", safe!(nums[1]).value());
    println!("out of bounds is err: {}", safe!(nums[9]).is_err());
}
