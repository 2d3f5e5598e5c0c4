//! The surface error type.
//!
//! Everything the browser can reject surfaces here: context acquisition on
//! mount and individual `Canvas2D` calls afterwards. The pure logic modules
//! never fail.

use wasm_bindgen::JsValue;

/// Errors raised by the browser-bound surface wrappers.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The canvas element did not yield a usable 2D rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    /// A `Canvas2D` call was rejected by the browser.
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(format!("{value:?}"))
    }
}
