//! Capability traits.
//!
//! [`ErrorLike`] is the structural "is this an error?" capability: a name and
//! a message, independent of concrete type. Every `core::error::Error`
//! implementor gets it for free, so user-defined failure types are recognized
//! without inheritance or opt-in.

pub mod error_like;

pub use error_like::ErrorLike;
