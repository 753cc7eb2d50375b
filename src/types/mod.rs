//! Core data model: the [`Outcome`] container and the failure types carried
//! by the safe adapters.
//!
//! # Examples
//!
//! ```
//! use safecall::types::{err, ok, Outcome};
//!
//! let good: Outcome<u32, &str> = ok(7);
//! let bad: Outcome<u32, &str> = err("lookup failed");
//!
//! assert!(good.is_ok());
//! assert_eq!(bad.error(), Some(&"lookup failed"));
//! ```

pub(crate) mod alloc_type;
pub mod outcome;

#[cfg(feature = "std")]
pub mod caught;
#[cfg(feature = "std")]
pub mod non_error;

pub use outcome::{err, err_with, ok, Outcome};

#[cfg(feature = "std")]
pub use caught::{is_error_like, CaughtError};
#[cfg(feature = "std")]
pub use non_error::NonError;

/// Outcome alias produced by the safe adapters.
///
/// The error side is always Error-like: either a passed-through
/// `Box<dyn Error + Send + Sync>` or a [`NonError`] normalizing whatever
/// else the callable panicked with.
#[cfg(feature = "std")]
pub type SafeOutcome<T> = Outcome<T, CaughtError>;
