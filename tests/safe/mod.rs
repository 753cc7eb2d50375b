use std::error::Error;
use std::io;

use safecall::{safe, safe_new, safe_sync, CaughtError};

struct Widget {
    label: String,
}

impl Widget {
    fn new(label: &str) -> Self {
        assert!(!label.is_empty(), "label must not be empty");
        Self { label: label.to_string() }
    }
}

#[test]
fn safe_sync_returns_ok_when_the_function_succeeds() {
    let r = safe_sync(|| "some");
    assert!(r.is_ok());
    assert_eq!(r.value(), Some(&"some"));
}

#[test]
fn safe_sync_classifies_a_str_panic_as_non_error() {
    let r = safe_sync(|| -> u32 { panic!("boom") });
    assert!(r.value().is_none());

    let Some(CaughtError::NonError(n)) = r.error() else {
        panic!("expected NonError");
    };
    assert_eq!(n.cause_str(), Some("boom"));
}

#[test]
fn safe_sync_classifies_a_formatted_panic_as_non_error() {
    let code = 7;
    let r = safe_sync(|| -> u32 { panic!("failed with code {code}") });

    let Some(CaughtError::NonError(n)) = r.error() else {
        panic!("expected NonError");
    };
    assert_eq!(n.cause_str(), Some("failed with code 7"));
}

#[test]
fn safe_sync_passes_error_like_payloads_through() {
    let r = safe_sync(|| -> u32 {
        let e: Box<dyn Error + Send + Sync> = io::Error::new(io::ErrorKind::Other, "some").into();
        std::panic::panic_any(e)
    });

    let caught = r.into_error().unwrap();
    assert!(caught.is::<io::Error>());
    assert_eq!(caught.to_string(), "some");
}

#[test]
fn safe_sync_keeps_custom_payloads_in_the_cause() {
    #[derive(Debug, PartialEq)]
    struct Token(u32);

    let r = safe_sync(|| -> () { std::panic::panic_any(Token(9)) });

    let Some(CaughtError::NonError(n)) = r.error() else {
        panic!("expected NonError");
    };
    assert_eq!(n.cause().downcast_ref::<Token>(), Some(&Token(9)));
}

#[test]
fn safe_sync_captures_arguments_through_the_closure() {
    let (a, b) = (6u32, 3u32);
    assert_eq!(safe_sync(move || a / b).value(), Some(&2));

    let zero = b - 3;
    assert!(safe_sync(move || a / zero).is_err());
}

#[test]
fn safe_new_returns_ok_when_the_constructor_succeeds() {
    let r = safe_new(|| Widget::new("gear"));
    assert_eq!(r.value().map(|w| w.label.as_str()), Some("gear"));
}

#[test]
fn safe_new_classifies_a_constructor_panic() {
    let r = safe_new(|| Widget::new(""));
    assert!(r.value().is_none());

    let Some(CaughtError::NonError(n)) = r.error() else {
        panic!("expected NonError");
    };
    assert_eq!(n.cause_str(), Some("label must not be empty"));
}

#[test]
fn safe_macro_wraps_expressions_and_blocks() {
    let nums = vec![1, 2, 3];

    let r = safe!(nums[1]);
    assert_eq!(r.value(), Some(&2));

    let r = safe!({
        let doubled = nums[2] * 2;
        doubled
    });
    assert_eq!(r.value(), Some(&6));

    assert!(safe!(nums[9]).is_err());
}

#[test]
fn reentering_a_boundary_does_not_double_wrap() {
    let first = safe_sync(|| -> u32 { panic!("boom") });
    let again = safe_sync(|| first.must());

    let CaughtError::NonError(n) = again.into_error().unwrap() else {
        panic!("expected the original NonError back");
    };
    assert_eq!(n.cause_str(), Some("boom"));
}
