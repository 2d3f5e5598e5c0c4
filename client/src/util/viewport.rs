//! Canvas viewport metrics.

/// CSS size and device pixel ratio for sizing a canvas backing store.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn canvas_metrics(canvas: &web_sys::HtmlCanvasElement) -> (f64, f64, f64) {
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    (width, height, dpr)
}
