//! Pointer tracking: the testable core state machine and the browser-bound
//! surface wrapper.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;
use crate::marker::Marker;
use crate::render;
use crate::sample::PointerSample;
use crate::velocity;

/// Actions returned from the core's input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerAction {
    /// The marker should be redrawn at its new position.
    MarkerMoved(Marker),
    /// A fresh velocity reading, in CSS pixels per second.
    VelocityMeasured(f64),
}

/// Core tracker state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`TrackerSurface`] so it can be tested without
/// WASM/browser dependencies. Exactly one baseline sample is retained at a
/// time; it is overwritten on every event and reset by the next
/// pointer-down.
#[derive(Debug, Default)]
pub struct TrackerCore {
    last: Option<PointerSample>,
}

impl TrackerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture: reset the baseline sample and move the marker.
    /// Never emits a velocity.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Vec<TrackerAction> {
        self.last = Some(sample);
        vec![TrackerAction::MarkerMoved(Marker::at(sample.position))]
    }

    /// Continue a gesture: measure velocity against the baseline sample,
    /// advance it, and move the marker.
    ///
    /// A move with no retained baseline (the pointer entered mid-gesture)
    /// behaves like a fresh pointer-down.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Vec<TrackerAction> {
        let mut actions = Vec::with_capacity(2);
        if let Some(reading) = self.measure(sample) {
            actions.push(TrackerAction::VelocityMeasured(reading));
        }
        actions.push(TrackerAction::MarkerMoved(Marker::at(sample.position)));
        actions
    }

    /// End a gesture: same measurement as a move, but the marker stays where
    /// the last move left it.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Vec<TrackerAction> {
        match self.measure(sample) {
            Some(reading) => vec![TrackerAction::VelocityMeasured(reading)],
            None => Vec::new(),
        }
    }

    /// The retained baseline sample, if any.
    #[must_use]
    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last
    }

    /// Measure velocity against the baseline sample and advance it.
    ///
    /// The retained position always advances to the newest event; the
    /// retained timestamp never moves backwards, so stored timestamps stay
    /// strictly increasing even when an event arrives out of order.
    fn measure(&mut self, sample: PointerSample) -> Option<f64> {
        let Some(last) = self.last else {
            self.last = Some(sample);
            return None;
        };
        let reading = velocity::estimate(last, sample);
        self.last = Some(PointerSample::new(
            sample.position,
            sample.timestamp.max(last.timestamp),
        ));
        reading
    }
}

/// The browser-bound tracker. Wraps [`TrackerCore`], owns the canvas
/// element and its 2D context, and redraws the marker as actions demand.
///
/// Velocity readings are collapsed out of the action vector and handed back
/// to the host, which owns their display.
pub struct TrackerSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: TrackerCore,
    viewport_width: f64,
    viewport_height: f64,
    dpr: f64,
}

impl TrackerSurface {
    /// Bind a tracker to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the element does not
    /// yield a 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = render::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            core: TrackerCore::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        })
    }

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
    }

    /// Forward a pointer-down event. Returns the velocity reading the event
    /// produced, which for a down event is always `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the marker redraw is rejected by the browser.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Result<Option<f64>, SurfaceError> {
        let actions = self.core.pointer_down(sample);
        self.process(&actions)
    }

    /// Forward a pointer-move event.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the marker redraw is rejected by the browser.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Result<Option<f64>, SurfaceError> {
        let actions = self.core.pointer_move(sample);
        self.process(&actions)
    }

    /// Forward a pointer-up event. Never redraws.
    ///
    /// # Errors
    ///
    /// Kept fallible for symmetry with the other handlers; the up path
    /// itself issues no canvas calls.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Result<Option<f64>, SurfaceError> {
        let actions = self.core.pointer_up(sample);
        self.process(&actions)
    }

    fn process(&self, actions: &[TrackerAction]) -> Result<Option<f64>, SurfaceError> {
        let mut reading = None;
        for action in actions {
            match action {
                TrackerAction::MarkerMoved(marker) => {
                    render::draw_marker(
                        &self.ctx,
                        *marker,
                        self.viewport_width,
                        self.viewport_height,
                        self.dpr,
                    )?;
                }
                TrackerAction::VelocityMeasured(value) => reading = Some(*value),
            }
        }
        Ok(reading)
    }
}
