//! Instantaneous velocity estimation between two pointer samples.

#[cfg(test)]
#[path = "velocity_test.rs"]
mod velocity_test;

use crate::sample::PointerSample;

/// Estimate pointer velocity between two consecutive samples, in CSS pixels
/// per second.
///
/// Returns `None` when the elapsed time is zero or negative (duplicate or
/// out-of-order event timestamps) so a degenerate division never produces a
/// non-finite reading. A returned value is always finite and non-negative.
#[must_use]
pub fn estimate(last: PointerSample, current: PointerSample) -> Option<f64> {
    let elapsed = current.timestamp - last.timestamp;
    if elapsed <= 0.0 {
        return None;
    }
    Some(last.position.distance_to(current.position) / elapsed)
}
