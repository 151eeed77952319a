//! Per-feature style definitions and interaction-state resolution.

use serde::{Serialize, Serializer};

use crate::color::{Rgba, BASE_OPACITY, HOVER_OPACITY};

use super::error::StyleError;
use super::feature::{FeatureType, InteractionState};

/// Circle sizing for features that can be drawn as points.
///
/// Hover and select radii are optional and fall back to the base radius,
/// so a point-capable style always resolves to some radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRadii {
    pub radius: f64,
    pub hover_radius: Option<f64>,
    pub select_radius: Option<f64>,
}

impl PointRadii {
    /// Radii for all three states.
    pub const fn new(radius: f64, hover_radius: f64, select_radius: f64) -> Self {
        Self {
            radius,
            hover_radius: Some(hover_radius),
            select_radius: Some(select_radius),
        }
    }

    /// A single radius used in every state.
    pub const fn uniform(radius: f64) -> Self {
        Self {
            radius,
            hover_radius: None,
            select_radius: None,
        }
    }

    /// Returns the radius for the given state.
    pub fn for_state(&self, state: InteractionState) -> f64 {
        match state {
            InteractionState::Base => self.radius,
            InteractionState::Hover => self.hover_radius.unwrap_or(self.radius),
            InteractionState::Selected => self.select_radius.unwrap_or(self.radius),
        }
    }
}

/// The style of one feature type across all interaction states.
///
/// Only one RGB triple is stored. The base, hover and select colors are
/// derived from it at [`BASE_OPACITY`], [`HOVER_OPACITY`] and full opacity,
/// which keeps emphasis increasing from base to hover to selected for every
/// feature type.
///
/// # Example
///
/// ```rust
/// use mapstyle::{InteractionState, PointRadii, StyleDefinition};
///
/// let style = StyleDefinition::new((255, 0, 0), 10.0, 14.0)
///     .with_point(PointRadii::new(6.0, 8.0, 8.0))
///     .with_min_zoom(12.0);
///
/// let selected = style.resolve(InteractionState::Selected);
/// assert_eq!(selected.color.to_string(), "rgb(255, 0, 0)");
/// assert_eq!(selected.stroke_width, 14.0);
/// assert_eq!(selected.radius, Some(8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDefinition {
    rgb: (u8, u8, u8),
    stroke_width: f64,
    hover_stroke_width: f64,
    point: Option<PointRadii>,
    min_zoom: Option<f64>,
}

impl StyleDefinition {
    /// Creates a line/polygon style that is visible at every zoom.
    pub const fn new(rgb: (u8, u8, u8), stroke_width: f64, hover_stroke_width: f64) -> Self {
        Self {
            rgb,
            stroke_width,
            hover_stroke_width,
            point: None,
            min_zoom: None,
        }
    }

    /// Makes the feature point-capable with the given radii.
    pub const fn with_point(mut self, radii: PointRadii) -> Self {
        self.point = Some(radii);
        self
    }

    /// Hides the feature below `zoom`.
    pub const fn with_min_zoom(mut self, zoom: f64) -> Self {
        self.min_zoom = Some(zoom);
        self
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    pub fn base_color(&self) -> Rgba {
        Rgba::from_triple(self.rgb).with_alpha(BASE_OPACITY)
    }

    pub fn hover_color(&self) -> Rgba {
        Rgba::from_triple(self.rgb).with_alpha(HOVER_OPACITY)
    }

    pub fn select_color(&self) -> Rgba {
        Rgba::from_triple(self.rgb)
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Stroke width for both hovered and selected features.
    pub fn hover_stroke_width(&self) -> f64 {
        self.hover_stroke_width
    }

    /// Point radii, or `None` for line/polygon-only features.
    pub fn point(&self) -> Option<&PointRadii> {
        self.point.as_ref()
    }

    pub fn is_point_capable(&self) -> bool {
        self.point.is_some()
    }

    pub fn min_zoom(&self) -> Option<f64> {
        self.min_zoom
    }

    /// Returns the color for the given state.
    pub fn color_for(&self, state: InteractionState) -> Rgba {
        match state {
            InteractionState::Base => self.base_color(),
            InteractionState::Hover => self.hover_color(),
            InteractionState::Selected => self.select_color(),
        }
    }

    /// Returns the stroke width for the given state.
    ///
    /// Selection has no width of its own: selected and hovered features
    /// share `hover_stroke_width` and differ only in color.
    pub fn stroke_width_for(&self, state: InteractionState) -> f64 {
        match state {
            InteractionState::Base => self.stroke_width,
            InteractionState::Hover | InteractionState::Selected => self.hover_stroke_width,
        }
    }

    /// Returns the radius for the given state, if the feature is point-capable.
    pub fn radius_for(&self, state: InteractionState) -> Option<f64> {
        self.point.map(|radii| radii.for_state(state))
    }

    /// Returns `true` if the feature should be drawn at `zoom`.
    ///
    /// The floor is inclusive. A NaN zoom never clears a floor, so floored
    /// features are hidden and unfloored ones stay visible.
    pub fn is_visible_at_zoom(&self, zoom: f64) -> bool {
        match self.min_zoom {
            Some(min_zoom) => zoom >= min_zoom,
            None => true,
        }
    }

    /// Resolves the concrete attributes to draw with in `state`.
    pub fn resolve(&self, state: InteractionState) -> ResolvedStyle {
        ResolvedStyle {
            color: self.color_for(state),
            stroke_width: self.stroke_width_for(state),
            radius: self.radius_for(state),
        }
    }

    /// Checks widths, radii and zoom floor against the table invariants.
    pub fn validate(&self, feature: FeatureType) -> Result<(), StyleError> {
        check_positive(feature, "strokeWidth", self.stroke_width)?;
        check_positive(feature, "hoverStrokeWidth", self.hover_stroke_width)?;
        if self.hover_stroke_width < self.stroke_width {
            return Err(StyleError::invalid(
                feature,
                format!(
                    "hoverStrokeWidth {} is less than strokeWidth {}",
                    self.hover_stroke_width, self.stroke_width
                ),
            ));
        }

        if let Some(radii) = &self.point {
            check_positive(feature, "radius", radii.radius)?;
            for (name, value) in [
                ("hoverRadius", radii.hover_radius),
                ("selectRadius", radii.select_radius),
            ] {
                let Some(value) = value else { continue };
                check_positive(feature, name, value)?;
                if value < radii.radius {
                    return Err(StyleError::invalid(
                        feature,
                        format!("{} {} is less than radius {}", name, value, radii.radius),
                    ));
                }
            }
        }

        if let Some(min_zoom) = self.min_zoom {
            if !min_zoom.is_finite() || min_zoom < 0.0 {
                return Err(StyleError::invalid(
                    feature,
                    format!("minZoom must be a non-negative number, got {}", min_zoom),
                ));
            }
        }

        Ok(())
    }
}

pub(crate) fn check_positive(
    context: impl ToString,
    name: &str,
    value: f64,
) -> Result<(), StyleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StyleError::invalid(
            context,
            format!("{} must be a positive number, got {}", name, value),
        ))
    }
}

/// The flattened record a map renderer expects for a feature type.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StyleRecord {
    base_color: Rgba,
    hover_color: Rgba,
    select_color: Rgba,
    stroke_width: f64,
    hover_stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hover_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_zoom: Option<f64>,
}

impl Serialize for StyleDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StyleRecord {
            base_color: self.base_color(),
            hover_color: self.hover_color(),
            select_color: self.select_color(),
            stroke_width: self.stroke_width,
            hover_stroke_width: self.hover_stroke_width,
            radius: self.radius_for(InteractionState::Base),
            hover_radius: self.radius_for(InteractionState::Hover),
            select_radius: self.radius_for(InteractionState::Selected),
            min_zoom: self.min_zoom,
        }
        .serialize(serializer)
    }
}

/// Attributes to draw one feature with, for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub color: Rgba,
    pub stroke_width: f64,
    /// `None` for line/polygon-only features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}
