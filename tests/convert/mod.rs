use safecall::{err_with, ok, IntoOutcome, Outcome};

#[test]
fn result_ok_becomes_a_success_outcome() {
    let r = "8080".parse::<u16>().into_outcome();
    assert_eq!(r.value(), Some(&8080));
    assert!(r.error().is_none());
}

#[test]
fn result_err_becomes_a_failure_outcome() {
    let r = "x".parse::<u16>().into_outcome();
    assert!(r.is_err());
    assert!(r.value().is_none());
}

#[test]
fn from_result_matches_into_outcome() {
    let result: Result<u32, &str> = Err("e");
    assert_eq!(Outcome::from(result), result.into_outcome());
}

#[test]
fn into_result_round_trips_simple_outcomes() {
    let r: Outcome<u32, &str> = ok(5);
    assert_eq!(r.into_result(), Ok(5));

    let r: Outcome<u32, &str> = safecall::err("e");
    assert_eq!(r.into_result(), Err("e"));
}

#[test]
fn into_result_drops_the_partial_value() {
    // Degraded success has no Result shape; only the error survives.
    let r = err_with(3u32, "late failure");
    assert_eq!(r.into_result(), Err("late failure"));
}
