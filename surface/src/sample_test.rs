use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_distance_three_four_five() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn point_distance_is_symmetric() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(-4.0, 14.0);
    assert_eq!(a.distance_to(b), b.distance_to(a));
}

#[test]
fn point_distance_to_self_is_zero() {
    let p = Point::new(7.0, 7.0);
    assert_eq!(p.distance_to(p), 0.0);
}

#[test]
fn point_clone_and_copy() {
    let a = Point::new(1.0, 1.0);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// PointerSample
// =============================================================

#[test]
fn sample_new_stores_fields() {
    let s = PointerSample::new(Point::new(10.0, 20.0), 1.25);
    assert_eq!(s.position, Point::new(10.0, 20.0));
    assert_eq!(s.timestamp, 1.25);
}

#[test]
fn sample_clone_and_copy() {
    let a = PointerSample::new(Point::new(0.0, 0.0), 0.5);
    let b = a;
    assert_eq!(a, b);
}
