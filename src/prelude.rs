//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use safecall::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`safe!`](macro@crate::safe)
//! - **Types**: [`Outcome`] and its free constructors, [`NonError`],
//!   [`CaughtError`], [`SafeOutcome`] (with `std`)
//! - **Traits**: [`ErrorLike`], [`IntoOutcome`]
//! - **Adapters**: [`safe_new`], [`safe_sync`] (with `std`)
//!
//! # Examples
//!
//! ```
//! use safecall::prelude::*;
//!
//! fn checked_divide(a: u32, b: u32) -> SafeOutcome<u32> {
//!     safe_sync(move || a / b)
//! }
//!
//! assert_eq!(checked_divide(6, 3).value(), Some(&2));
//! assert!(checked_divide(1, 0).is_err());
//! ```

// Macros
pub use crate::safe;

// Core types and constructors
pub use crate::types::{err, err_with, ok, Outcome};

// Traits
pub use crate::convert::IntoOutcome;
pub use crate::traits::ErrorLike;

#[cfg(feature = "std")]
pub use crate::safe::{safe_new, safe_sync};
#[cfg(feature = "std")]
pub use crate::types::{is_error_like, CaughtError, NonError, SafeOutcome};
