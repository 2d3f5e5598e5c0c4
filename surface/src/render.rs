//! Marker rendering against the 2D context.
//!
//! Receives a read-only marker and produces pixels — it does not mutate any
//! tracker state. Fallible `Canvas2D` calls propagate via
//! `Result<(), JsValue>`; the surface wrappers convert at their boundary.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{MARKER_FILL, MARKER_LINE_WIDTH, MARKER_RADIUS, MARKER_STROKE};
use crate::error::SurfaceError;
use crate::marker::Marker;

/// Draw the marker: clear the surface and paint one fixed-radius circle at
/// the marker's center.
///
/// `viewport_w` and `viewport_h` are in CSS pixels; `dpr` is the device
/// pixel ratio applied to the backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_marker(
    ctx: &CanvasRenderingContext2d,
    marker: Marker,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    ctx.begin_path();
    ctx.arc(marker.center.x, marker.center.y, MARKER_RADIUS, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(MARKER_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(MARKER_STROKE);
    ctx.set_line_width(MARKER_LINE_WIDTH);
    ctx.stroke();
    Ok(())
}

/// Acquire the element's 2D rendering context.
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")?
        .ok_or(SurfaceError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::ContextUnavailable)
}
