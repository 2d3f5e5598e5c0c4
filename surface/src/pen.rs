//! Pen style for the inking surface.

#[cfg(test)]
#[path = "pen_test.rs"]
mod pen_test;

use crate::consts::{PEN_COLOR, PEN_WIDTH};

/// Which pointer input types the inking surface accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Accept every pointer type (mouse, touch, pen).
    #[default]
    AnyInput,
    /// Accept stylus input only.
    PenOnly,
}

impl InputPolicy {
    /// Whether a DOM `pointerType` string is accepted under this policy.
    ///
    /// The browser reports an empty string for pointers it cannot classify;
    /// [`InputPolicy::AnyInput`] accepts those too.
    #[must_use]
    pub fn accepts(self, pointer_type: &str) -> bool {
        match self {
            Self::AnyInput => true,
            Self::PenOnly => pointer_type == "pen",
        }
    }
}

/// The fixed ink tool configuration: solid color, fixed width, input policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    /// CSS color string.
    pub color: String,
    /// Stroke width in CSS pixels.
    pub width: f64,
    pub input: InputPolicy,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: PEN_COLOR.to_owned(),
            width: PEN_WIDTH,
            input: InputPolicy::AnyInput,
        }
    }
}

impl PenStyle {
    /// Whether a DOM `pointerType` string is accepted by this pen.
    #[must_use]
    pub fn accepts(&self, pointer_type: &str) -> bool {
        self.input.accepts(pointer_type)
    }
}
