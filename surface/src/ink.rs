//! Inking surface: fixed-pen stroke delegation to the 2D context.
//!
//! Stroke geometry, smoothing and rasterization are entirely the context's
//! concern — this wrapper never buffers points beyond the last one. Each
//! pointer event strokes one segment with round caps and joins; strokes
//! accumulate on the backing store until [`InkSurface::clear`].

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;
use crate::pen::PenStyle;
use crate::render;
use crate::sample::Point;

/// A drawing surface configured once with a fixed pen.
pub struct InkSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pen: PenStyle,
    stroke_from: Option<Point>,
    dpr: f64,
}

impl InkSurface {
    /// Bind an inking surface to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the element does not
    /// yield a 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement, pen: PenStyle) -> Result<Self, SurfaceError> {
        let ctx = render::context_2d(&canvas)?;
        let surface = Self {
            canvas,
            ctx,
            pen,
            stroke_from: None,
            dpr: 1.0,
        };
        surface.apply_pen();
        Ok(surface)
    }

    /// The pen this surface was configured with.
    #[must_use]
    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// Resizing the backing store resets all context state, so the pen
    /// configuration is re-applied afterwards. The store contents are lost;
    /// that matches the transient nature of the demo surface.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.dpr = dpr;
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
        self.apply_pen();
    }

    /// Begin a stroke at the given point.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn begin_stroke(&mut self, point: Point) -> Result<(), SurfaceError> {
        self.stroke_from = Some(point);
        // A stationary tap leaves a dot: zero-length segment, round caps.
        self.stroke_segment(point, point)
    }

    /// Extend the active stroke to the given point. No-op when no stroke is
    /// active (the pointer went down outside the surface).
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn extend_stroke(&mut self, point: Point) -> Result<(), SurfaceError> {
        let Some(from) = self.stroke_from else {
            return Ok(());
        };
        self.stroke_from = Some(point);
        self.stroke_segment(from, point)
    }

    /// End the active stroke.
    pub fn end_stroke(&mut self) {
        self.stroke_from = None;
    }

    /// Whether a stroke is currently active.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.stroke_from.is_some()
    }

    /// Wipe the backing store.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.stroke_from = None;
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        Ok(())
    }

    fn stroke_segment(&self, from: Point, to: Point) -> Result<(), SurfaceError> {
        self.ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn apply_pen(&self) {
        self.ctx.set_stroke_style_str(&self.pen.color);
        self.ctx.set_line_width(self.pen.width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
}
