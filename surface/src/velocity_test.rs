use super::*;

use crate::sample::Point;

fn sample(x: f64, y: f64, t: f64) -> PointerSample {
    PointerSample::new(Point::new(x, y), t)
}

#[test]
fn three_four_five_over_one_second_is_five() {
    let reading = estimate(sample(0.0, 0.0, 0.0), sample(3.0, 4.0, 1.0));
    assert_eq!(reading, Some(5.0));
}

#[test]
fn scales_with_elapsed_time() {
    let reading = estimate(sample(0.0, 0.0, 0.0), sample(3.0, 4.0, 0.5));
    assert_eq!(reading, Some(10.0));
}

#[test]
fn stationary_pointer_reads_zero() {
    let reading = estimate(sample(5.0, 5.0, 0.0), sample(5.0, 5.0, 0.1));
    assert_eq!(reading, Some(0.0));
}

#[test]
fn reading_is_never_negative() {
    let cases = [
        (sample(10.0, 10.0, 0.0), sample(0.0, 0.0, 1.0)),
        (sample(-3.0, 4.0, 1.0), sample(3.0, -4.0, 2.0)),
        (sample(0.0, 0.0, 0.0), sample(0.0, -1.0, 4.0)),
    ];
    for (last, current) in cases {
        let reading = estimate(last, current);
        assert!(reading.is_some_and(|v| v >= 0.0), "negative reading for {last:?} -> {current:?}");
    }
}

#[test]
fn identical_timestamps_skip_the_reading() {
    let reading = estimate(sample(0.0, 0.0, 1.0), sample(3.0, 4.0, 1.0));
    assert_eq!(reading, None);
}

#[test]
fn out_of_order_timestamps_skip_the_reading() {
    let reading = estimate(sample(0.0, 0.0, 2.0), sample(3.0, 4.0, 1.0));
    assert_eq!(reading, None);
}

#[test]
fn reading_is_always_finite() {
    let reading = estimate(sample(0.0, 0.0, 0.0), sample(1e12, 1e12, 1e-9));
    assert!(reading.is_some_and(f64::is_finite));
}
