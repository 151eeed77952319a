//! Styles for transient geometry that has no feature type.
//!
//! The draw overlay styles shapes while the user is drawing them; the hover
//! overlay styles generic hover feedback. Callers pick one based on their
//! own UI mode. Neither is resolved against an interaction state.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::style::{check_positive, StyleError};

/// Style for user-drawn or generically hovered geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub stroke_width: f64,
    pub stroke_color: Rgba,
    pub fill_color: Rgba,
    /// Radius of vertex/point circles.
    pub radius: f64,
    pub circle_color: Rgba,
    pub circle_stroke_width: f64,
    pub circle_stroke_color: Rgba,
}

impl OverlayStyle {
    /// Checks that widths and radius are usable.
    ///
    /// `circle_stroke_width` may be zero to draw circles without an outline.
    pub fn validate(&self, kind: OverlayKind) -> Result<(), StyleError> {
        let context = format!("{} overlay", kind);
        check_positive(&context, "strokeWidth", self.stroke_width)?;
        check_positive(&context, "radius", self.radius)?;
        if !self.circle_stroke_width.is_finite() || self.circle_stroke_width < 0.0 {
            return Err(StyleError::invalid(
                &context,
                format!(
                    "circleStrokeWidth must be a non-negative number, got {}",
                    self.circle_stroke_width
                ),
            ));
        }
        Ok(())
    }
}

/// Translucent periwinkle used to fill overlay shapes.
const OVERLAY_FILL: (u8, u8, u8) = (125, 125, 255);

/// Style for geometry the user is currently drawing.
pub const DRAW_STYLE: OverlayStyle = OverlayStyle {
    stroke_width: 2.0,
    stroke_color: Rgba::rgb(0, 0, 255),
    fill_color: Rgba::new(OVERLAY_FILL.0, OVERLAY_FILL.1, OVERLAY_FILL.2, 0.4),
    radius: 6.0,
    circle_color: Rgba::new(OVERLAY_FILL.0, OVERLAY_FILL.1, OVERLAY_FILL.2, 0.4),
    circle_stroke_width: 1.0,
    circle_stroke_color: Rgba::rgb(0, 0, 0),
};

/// Style for hovered geometry that has no feature type.
pub const HOVER_STYLE: OverlayStyle = OverlayStyle {
    stroke_width: 4.0,
    stroke_color: Rgba::rgb(0, 0, 255),
    fill_color: Rgba::new(OVERLAY_FILL.0, OVERLAY_FILL.1, OVERLAY_FILL.2, 0.8),
    radius: 6.0,
    circle_color: Rgba::new(OVERLAY_FILL.0, OVERLAY_FILL.1, OVERLAY_FILL.2, 0.48),
    circle_stroke_width: 1.0,
    circle_stroke_color: Rgba::rgb(0, 0, 0),
};

/// Which overlay style a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Draw,
    Hover,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Draw => "draw",
            OverlayKind::Hover => "hover",
        }
    }
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of overlay styles in use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyles {
    pub draw: OverlayStyle,
    pub hover: OverlayStyle,
}

static BUILTIN_OVERLAYS: OverlayStyles = OverlayStyles {
    draw: DRAW_STYLE,
    hover: HOVER_STYLE,
};

impl OverlayStyles {
    /// Returns the built-in draw and hover overlays.
    pub fn builtin() -> &'static OverlayStyles {
        &BUILTIN_OVERLAYS
    }

    pub fn get(&self, kind: OverlayKind) -> &OverlayStyle {
        match kind {
            OverlayKind::Draw => &self.draw,
            OverlayKind::Hover => &self.hover,
        }
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        self.draw.validate(OverlayKind::Draw)?;
        self.hover.validate(OverlayKind::Hover)
    }
}

impl Default for OverlayStyles {
    fn default() -> Self {
        BUILTIN_OVERLAYS
    }
}
