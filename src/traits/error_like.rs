//! The Error-like capability.

use core::error::Error;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::types::alloc_type::String;

/// Structural capability of error values: a short name and a human-readable
/// message.
///
/// This is deliberately an interface, not a base type: anything implementing
/// `core::error::Error` satisfies it through the blanket impl, so standard
/// errors and user-defined errors both pass without registration.
///
/// # Examples
///
/// ```
/// use safecall::ErrorLike;
///
/// let e = "17x".parse::<u32>().unwrap_err();
/// assert_eq!(e.name(), "ParseIntError");
/// assert!(e.message().contains("invalid digit"));
/// ```
pub trait ErrorLike {
    /// Short type-level name of the error.
    fn name(&self) -> &'static str;

    /// Human-readable description of the error.
    fn message(&self) -> String;
}

impl<E: Error> ErrorLike for E {
    /// Last path segment of the concrete type name.
    fn name(&self) -> &'static str {
        let full = core::any::type_name::<E>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// The `Display` output of the error.
    fn message(&self) -> String {
        self.to_string()
    }
}
