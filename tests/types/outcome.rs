use safecall::{err, err_with, ok, Outcome};

#[test]
fn ok_creates_with_a_non_void_value() {
    let r: Outcome<&str, std::io::Error> = ok("some");
    assert!(r.is_ok());
    assert_eq!(r.value(), Some(&"some"));
    assert!(r.error().is_none());
}

#[test]
fn ok_creates_with_a_void_value() {
    let r: Outcome<(), std::io::Error> = ok(());
    assert!(r.is_ok());
    assert_eq!(r.value(), Some(&()));
    assert!(r.error().is_none());
}

#[test]
fn err_creates_with_an_error() {
    let e = std::io::Error::new(std::io::ErrorKind::Other, "x");
    let r: Outcome<String, _> = err(e);
    assert!(r.is_err());
    assert!(r.value().is_none());
    assert_eq!(r.error().unwrap().to_string(), "x");
}

#[test]
fn err_with_keeps_the_partial_value() {
    let r = err_with("partial", "stream closed");
    assert!(r.is_err());
    assert_eq!(r.value(), Some(&"partial"));
    assert_eq!(r.error(), Some(&"stream closed"));
}

#[test]
fn into_parts_exposes_the_raw_shape() {
    assert_eq!(ok::<_, &str>("hello").into_parts(), (Some("hello"), None));
    assert_eq!(err::<&str, _>("e").into_parts(), (None, Some("e")));
    assert_eq!(err_with("v", "e").into_parts(), (Some("v"), Some("e")));
}

#[test]
fn map_transforms_full_and_partial_values() {
    let r: Outcome<u32, &str> = ok(2);
    assert_eq!(r.map(|v| v * 10).value(), Some(&20));

    let r = err_with(2u32, "late failure").map(|v| v * 10);
    assert_eq!(r.value(), Some(&20));
    assert_eq!(r.error(), Some(&"late failure"));
}

#[test]
fn map_err_leaves_values_in_place() {
    let r: Outcome<u32, &str> = err_with(7, "raw");
    let r = r.map_err(|e| format!("wrapped: {e}"));
    assert_eq!(r.value(), Some(&7));
    assert_eq!(r.error().map(String::as_str), Some("wrapped: raw"));
}

#[test]
fn associated_constructors_match_free_functions() {
    assert_eq!(Outcome::<_, &str>::ok(1), ok(1));
    assert_eq!(Outcome::<u32, _>::err("e"), err("e"));
    assert_eq!(Outcome::err_with(1, "e"), err_with(1, "e"));
}

#[test]
fn outcomes_compare_by_fields_only() {
    // No identity beyond the two fields.
    let a: Outcome<u32, &str> = err_with(1, "e");
    let b: Outcome<u32, &str> = err_with(1, "e");
    assert_eq!(a, b);
}
