//! Explicit success/failure container.
//!
//! [`Outcome`] is a two-variant tagged union: [`Outcome::Ok`] carries a value,
//! [`Outcome::Err`] carries an error plus an optional partial value (a
//! "degraded success"). Presence of the error is the sole failure
//! discriminant; the partial value is never required to interpret failure.
//!
//! Outcomes are plain immutable values, created per call and discarded once
//! consumed. There is no shared state behind them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tagged union representing either a successful value or a failure.
///
/// Unlike `core::result::Result`, the failure side may carry a partial value
/// alongside the error, for callers that can report what they produced before
/// failing.
///
/// # Examples
///
/// ```
/// use safecall::{err, ok, Outcome};
///
/// fn parse_port(s: &str) -> Outcome<u16, core::num::ParseIntError> {
///     match s.parse() {
///         Ok(port) => ok(port),
///         Err(e) => err(e),
///     }
/// }
///
/// assert_eq!(parse_port("8080").value(), Some(&8080));
/// assert!(parse_port("not a port").is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<V, E> {
    /// Successful completion with a value.
    Ok(V),
    /// Failed completion: an error, optionally alongside a partial value.
    Err {
        /// Partial value produced before the failure, if any.
        value: Option<V>,
        /// The failure itself.
        error: E,
    },
}

/// Creates a success [`Outcome`] containing the given value.
///
/// The void form of the original API is spelled `ok(())`; an absent value is
/// not an error signal.
///
/// # Examples
///
/// ```
/// use safecall::{ok, Outcome};
///
/// let r: Outcome<&str, std::io::Error> = ok("hello");
/// assert_eq!(r.value(), Some(&"hello"));
/// assert!(r.error().is_none());
///
/// let done: Outcome<(), std::io::Error> = ok(());
/// assert!(done.is_ok());
/// ```
#[inline]
pub fn ok<V, E>(value: V) -> Outcome<V, E> {
    Outcome::Ok(value)
}

/// Creates a failure [`Outcome`] containing the given error and no value.
///
/// This is a pure builder; the error is stored as given, never inspected.
///
/// # Examples
///
/// ```
/// use safecall::{err, Outcome};
///
/// let e = std::io::Error::new(std::io::ErrorKind::Other, "x");
/// let r: Outcome<String, _> = err(e);
/// assert!(r.value().is_none());
/// assert_eq!(r.error().unwrap().to_string(), "x");
/// ```
#[inline]
pub fn err<V, E>(error: E) -> Outcome<V, E> {
    Outcome::Err { value: None, error }
}

/// Creates a failure [`Outcome`] carrying a partial value alongside the error.
///
/// For callers that can report a degraded result together with the failure
/// that interrupted it. The two fields are stored as given; no merging or
/// recovery semantics are implied.
///
/// # Examples
///
/// ```
/// use safecall::err_with;
///
/// let r = err_with(vec!["line 1"], "stream closed early");
/// assert_eq!(r.value(), Some(&vec!["line 1"]));
/// assert_eq!(r.error(), Some(&"stream closed early"));
/// ```
#[inline]
pub fn err_with<V, E>(value: V, error: E) -> Outcome<V, E> {
    Outcome::Err { value: Some(value), error }
}

impl<V, E> Outcome<V, E> {
    /// Creates a success outcome. Equivalent to the free [`ok`] function.
    #[inline]
    pub fn ok(value: V) -> Self {
        ok(value)
    }

    /// Creates a failure outcome. Equivalent to the free [`err`] function.
    #[inline]
    pub fn err(error: E) -> Self {
        err(error)
    }

    /// Creates a failure outcome with a partial value. Equivalent to the free
    /// [`err_with`] function.
    #[inline]
    pub fn err_with(value: V, error: E) -> Self {
        err_with(value, error)
    }

    /// Returns `true` if no error is present.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if an error is present.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err { .. })
    }

    /// Returns the contained value, if any.
    ///
    /// A failure outcome may still yield `Some` here when it carries a
    /// partial value.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err { value, .. } => value.as_ref(),
        }
    }

    /// Returns the contained error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err { error, .. } => Some(error),
        }
    }

    /// Consumes the outcome, returning the value (full or partial), if any.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err { value, .. } => value,
        }
    }

    /// Consumes the outcome, returning the error, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err { error, .. } => Some(error),
        }
    }

    /// Consumes the outcome, returning its two fields.
    ///
    /// This is the raw `{v, err}` shape of the container: exactly one of the
    /// two is always present, and both are present for a degraded success.
    #[inline]
    pub fn into_parts(self) -> (Option<V>, Option<E>) {
        match self {
            Outcome::Ok(value) => (Some(value), None),
            Outcome::Err { value, error } => (value, Some(error)),
        }
    }

    /// Maps the value (full or partial) with `f`, leaving any error in place.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err { value, error } => Outcome::Err { value: value.map(f), error },
        }
    }

    /// Maps the error with `f`, leaving any value in place.
    #[inline]
    pub fn map_err<U, F>(self, f: F) -> Outcome<V, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err { value, error } => Outcome::Err { value, error: f(error) },
        }
    }

    /// Converts into a `core::result::Result`, dropping any partial value on
    /// the failure side (the degraded-success shape has no `Result`
    /// counterpart).
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err { error, .. } => Err(error),
        }
    }

    /// Unwraps the outcome, re-raising the stored error if one is present.
    ///
    /// This is the library's only bridge back from explicit-outcome style to
    /// unwinding style. The error is raised via
    /// [`std::panic::panic_any`] as the exact stored value, not a rewrapped
    /// copy, so a downstream [`std::panic::catch_unwind`] can downcast the
    /// payload back to `E` (the Rust form of catch-by-type).
    ///
    /// # Panics
    ///
    /// Panics with the stored error when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use safecall::{ok, Outcome};
    ///
    /// let r: Outcome<u32, std::io::Error> = ok(7);
    /// assert_eq!(r.must(), 7);
    /// ```
    ///
    /// ```should_panic
    /// use safecall::{err, Outcome};
    ///
    /// let r: Outcome<u32, &str> = err("nope");
    /// r.must(); // panics with the &str payload "nope"
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn must(self) -> V
    where
        E: core::any::Any + Send,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err { error, .. } => std::panic::panic_any(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }
}
