use super::*;

// =============================================================
// InputPolicy
// =============================================================

#[test]
fn default_policy_is_any_input() {
    assert_eq!(InputPolicy::default(), InputPolicy::AnyInput);
}

#[test]
fn any_input_accepts_every_pointer_type() {
    for pointer_type in ["mouse", "touch", "pen", ""] {
        assert!(InputPolicy::AnyInput.accepts(pointer_type));
    }
}

#[test]
fn pen_only_accepts_just_the_stylus() {
    assert!(InputPolicy::PenOnly.accepts("pen"));
    assert!(!InputPolicy::PenOnly.accepts("mouse"));
    assert!(!InputPolicy::PenOnly.accepts("touch"));
    assert!(!InputPolicy::PenOnly.accepts(""));
}

// =============================================================
// PenStyle
// =============================================================

#[test]
fn default_pen_is_solid_black_width_fifteen() {
    let pen = PenStyle::default();
    assert_eq!(pen.color, "#000000");
    assert_eq!(pen.width, 15.0);
    assert_eq!(pen.input, InputPolicy::AnyInput);
}

#[test]
fn pen_delegates_acceptance_to_its_policy() {
    let pen = PenStyle {
        input: InputPolicy::PenOnly,
        ..PenStyle::default()
    };
    assert!(pen.accepts("pen"));
    assert!(!pen.accepts("touch"));
}
