use super::*;

#[test]
fn default_has_no_reading() {
    assert_eq!(ReadoutState::default().velocity, None);
}

#[test]
fn stores_the_latest_reading() {
    let state = ReadoutState { velocity: Some(5.0) };
    assert_eq!(state.velocity, Some(5.0));
}

#[test]
fn clone_and_copy() {
    let a = ReadoutState { velocity: Some(1.5) };
    let b = a;
    assert_eq!(a, b);
}
