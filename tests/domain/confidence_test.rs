use voxcheck::domain::{Confidence, MAX_CONFIDENCE};

#[test]
fn given_value_above_cap_when_creating_then_clamps_to_cap() {
    assert_eq!(Confidence::new(3.6).value(), MAX_CONFIDENCE);
}

#[test]
fn given_negative_value_when_creating_then_clamps_to_zero() {
    assert_eq!(Confidence::new(-0.4).value(), 0.0);
}

#[test]
fn given_nan_when_creating_then_yields_zero() {
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
}

#[test]
fn given_many_decimals_when_creating_then_rounds_to_two() {
    assert_eq!(Confidence::new(0.456).value(), 0.46);
    assert_eq!(Confidence::new(0.3999999999).value(), 0.4);
}

#[test]
fn given_exact_half_hundredth_when_creating_then_rounds_away_from_zero() {
    assert_eq!(Confidence::new(0.125).value(), 0.13);
}

#[test]
fn given_confidence_when_serialized_then_is_plain_number() {
    let json = serde_json::to_string(&Confidence::new(0.75)).unwrap();
    assert_eq!(json, "0.75");
}
