//! # Mapstyle - Style Resolution for Map Layers
//!
//! Mapstyle decides how a web map draws its features. Given a feature type
//! (road, address, place name, local government area, locality), an
//! interaction state (base, hover, selected) and the current zoom, it returns
//! the color, stroke width and point radius to render with.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapstyle::{FeatureType, InteractionState};
//!
//! if mapstyle::is_visible_at_zoom(FeatureType::Placename, 14.0) {
//!     let style = mapstyle::resolve(FeatureType::Placename, InteractionState::Selected);
//!     assert_eq!(style.color.to_string(), "rgb(255, 0, 0)");
//!     assert_eq!(style.stroke_width, 14.0);
//!     assert_eq!(style.radius, Some(8.0));
//! }
//! ```
//!
//! ## Colors and states
//!
//! Each feature type has one RGB color. Its base state draws it at 50%
//! opacity, hover at 70% and selected fully opaque. Hovered and selected
//! features share the wider hover stroke.
//!
//! ## Zoom floors
//!
//! Most feature types are hidden below a minimum zoom: roads and place names
//! below 12, localities below 10, addresses below 16.9. Local government
//! areas are always shown. The floor is inclusive.
//!
//! ## Overlays
//!
//! [`draw_style`] and [`hover_style`] style transient geometry that is not a
//! classified feature, like a shape the user is drawing.
//!
//! ## Stylesheets
//!
//! The built-in table can be replaced by a YAML [`StyleSheet`] loaded once at
//! start-up. All tables are immutable and can be shared across threads
//! without locking.

mod color;
mod overlay;
pub mod style;
mod stylesheet;
pub mod vocab;

pub use color::{ColorParseError, Rgba, BASE_OPACITY, HOVER_OPACITY, PRIMARY_COLOR};
pub use overlay::{OverlayKind, OverlayStyle, OverlayStyles, DRAW_STYLE, HOVER_STYLE};
pub use style::{
    FeatureType, InteractionState, PointRadii, ResolvedStyle, StyleDefinition, StyleError,
    StyleTable,
};
pub use stylesheet::StyleSheet;
pub use vocab::AddressPart;

/// Returns the built-in style for `feature`.
pub fn get_style(feature: FeatureType) -> &'static StyleDefinition {
    StyleTable::builtin().get(feature)
}

/// Returns the built-in style for a string key such as `"road"`.
///
/// # Errors
///
/// [`StyleError::UnknownFeatureType`] if `key` is not a feature type.
pub fn get_style_by_name(key: &str) -> Result<&'static StyleDefinition, StyleError> {
    StyleTable::builtin().get_by_name(key)
}

/// Resolves the built-in style for `feature` in `state`.
pub fn resolve(feature: FeatureType, state: InteractionState) -> ResolvedStyle {
    StyleTable::builtin().resolve(feature, state)
}

/// Returns `true` if `feature` is drawn at `zoom` with the built-in table.
pub fn is_visible_at_zoom(feature: FeatureType, zoom: f64) -> bool {
    StyleTable::builtin().is_visible_at_zoom(feature, zoom)
}

/// Style for geometry the user is drawing.
pub fn draw_style() -> &'static OverlayStyle {
    &OverlayStyles::builtin().draw
}

/// Style for hovered geometry that has no feature type.
pub fn hover_style() -> &'static OverlayStyle {
    &OverlayStyles::builtin().hover
}

/// Returns the built-in overlay style of the given kind.
pub fn overlay(kind: OverlayKind) -> &'static OverlayStyle {
    OverlayStyles::builtin().get(kind)
}
