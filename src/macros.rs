//! Ergonomic shorthand for the synchronous panic boundary.
//!
//! [`macro@crate::safe`] wraps an expression or block in
//! [`safe_sync`](crate::safe_sync), so call sites read as annotations rather
//! than closures.

/// Wraps an expression or block in a panic boundary, returning a
/// [`SafeOutcome`](crate::SafeOutcome).
///
/// Requires the `std` feature (the boundary is built on `catch_unwind`).
///
/// # Syntax
///
/// - `safe!(expr)` - wraps a single expression
/// - `safe!({ ... })` - wraps a block
///
/// # Examples
///
/// ```
/// use safecall::safe;
///
/// let nums = vec![1, 2, 3];
/// let r = safe!(nums[1]);
/// assert_eq!(r.value(), Some(&2));
///
/// let r = safe!(nums[9]); // out of bounds panics; the boundary catches it
/// assert!(r.is_err());
/// ```
#[macro_export]
macro_rules! safe {
    ({ $($body:tt)* }) => {
        $crate::safe_sync(|| { $($body)* })
    };
    ($expr:expr) => {
        $crate::safe_sync(|| $expr)
    };
}
