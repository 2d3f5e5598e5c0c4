//! Shared numeric and color constants for the surface crate.

// ── Marker ──────────────────────────────────────────────────────

/// Marker circle radius in CSS pixels. Fixed — independent of velocity.
pub const MARKER_RADIUS: f64 = 5.0;

/// Marker outline width in CSS pixels.
pub const MARKER_LINE_WIDTH: f64 = 0.5;

/// Marker outline color.
pub const MARKER_STROKE: &str = "#2ecc40";

/// Marker body color (half-transparent so the ink below stays visible).
pub const MARKER_FILL: &str = "rgba(46, 204, 64, 0.5)";

// ── Pen ─────────────────────────────────────────────────────────

/// Fixed pen stroke width in CSS pixels.
pub const PEN_WIDTH: f64 = 15.0;

/// Fixed pen color.
pub const PEN_COLOR: &str = "#000000";
