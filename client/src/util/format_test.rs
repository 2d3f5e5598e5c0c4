use super::*;

#[test]
fn formats_to_one_decimal_place() {
    assert_eq!(format_velocity(Some(5.0)), "5.0 px/s");
    assert_eq!(format_velocity(Some(123.456)), "123.5 px/s");
}

#[test]
fn zero_is_a_valid_reading() {
    assert_eq!(format_velocity(Some(0.0)), "0.0 px/s");
}

#[test]
fn missing_reading_shows_a_dash() {
    assert_eq!(format_velocity(None), "—");
}
