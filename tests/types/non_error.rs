use std::error::Error;

use safecall::{ErrorLike, NonError};

#[test]
fn name_and_message_are_fixed() {
    let n = NonError::new(Box::new("some"));
    assert_eq!(NonError::NAME, "NonError");
    assert_eq!(NonError::MESSAGE, "Non-Error thrown");
    assert_eq!(n.name(), "NonError");
    assert_eq!(n.message(), "Non-Error thrown");
    assert_eq!(n.to_string(), "Non-Error thrown");
}

#[test]
fn cause_str_covers_both_string_payload_shapes() {
    let n = NonError::new(Box::new("static str"));
    assert_eq!(n.cause_str(), Some("static str"));

    let n = NonError::new(Box::new(String::from("owned string")));
    assert_eq!(n.cause_str(), Some("owned string"));
}

#[test]
fn cause_keeps_arbitrary_payloads_verbatim() {
    let n = NonError::new(Box::new(42u32));
    assert_eq!(n.cause_str(), None);
    assert_eq!(n.cause().downcast_ref::<u32>(), Some(&42));
}

#[test]
fn into_cause_returns_the_original_payload() {
    let n = NonError::new(Box::new(vec![1u8, 2, 3]));
    let cause = n.into_cause();
    assert_eq!(*cause.downcast::<Vec<u8>>().unwrap(), vec![1, 2, 3]);
}

#[test]
fn debug_renders_string_causes() {
    let n = NonError::new(Box::new("boom"));
    let debug = format!("{n:?}");
    assert!(debug.contains("NonError"));
    assert!(debug.contains("boom"));
}

#[test]
fn usable_as_an_error_trait_object() {
    let n = NonError::new(Box::new("some"));
    let as_error: &dyn Error = &n;
    assert_eq!(as_error.to_string(), "Non-Error thrown");
}
