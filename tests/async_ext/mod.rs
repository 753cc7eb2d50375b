//! Integration tests for the async panic boundary.


#[cfg(feature = "async-tokio")]
mod tokio_tests;
