//! Points and timestamped pointer samples.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

/// A point on the surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A single pointer position-time reading.
///
/// `timestamp` is in seconds, derived from the DOM event's `timeStamp`
/// (milliseconds since the page's time origin — monotonic within a page).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub timestamp: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(position: Point, timestamp: f64) -> Self {
        Self { position, timestamp }
    }
}
