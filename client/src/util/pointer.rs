//! Pointer event mapping helpers.

#[cfg(feature = "hydrate")]
use surface::sample::{Point, PointerSample};

/// Surface-local position of a pointer event, in CSS pixels.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Position-time sample of a pointer event.
///
/// The DOM `timeStamp` is milliseconds since the page's time origin —
/// monotonic within a page, unlike wall-clock time — converted to seconds
/// here so velocity readings come out in pixels per second.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_sample(ev: &leptos::ev::PointerEvent) -> PointerSample {
    PointerSample::new(pointer_point(ev), ev.time_stamp() / 1000.0)
}
