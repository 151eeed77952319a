//! YAML stylesheets.
//!
//! A stylesheet replaces the built-in table (and optionally the overlays)
//! at start-up. Each feature type gives one opaque color; the base and hover
//! variants are derived from it like they are for the built-in table.
//!
//! ```yaml
//! features:
//!   road:
//!     color: "rgb(0, 0, 255)"
//!     strokeWidth: 10
//!     hoverStrokeWidth: 14
//!     minZoom: 12
//!   address:
//!     color: grey
//!     strokeWidth: 4
//!     hoverStrokeWidth: 8
//!     radius: 4
//!     hoverRadius: 6
//!     selectRadius: 6
//!     minZoom: 16.9
//!   # placename, lga and locality are required too
//! overlays:
//!   draw:
//!     strokeWidth: 2
//!     strokeColor: blue
//!     fillColor: "rgba(125, 125, 255, 0.4)"
//!     radius: 6
//!     circleColor: "rgba(125, 125, 255, 0.4)"
//!     circleStrokeWidth: 1
//!     circleStrokeColor: black
//! ```
//!
//! `overlays`, and each of `draw`/`hover` inside it, may be left out to keep
//! the built-in overlay.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::color::{ColorParseError, Rgba};
use crate::overlay::{OverlayKind, OverlayStyle, OverlayStyles};
use crate::style::{FeatureType, PointRadii, StyleDefinition, StyleError, StyleTable};

/// A feature table plus the overlay styles to use with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    features: StyleTable,
    overlays: OverlayStyles,
}

impl StyleSheet {
    pub fn new(features: StyleTable, overlays: OverlayStyles) -> Result<Self, StyleError> {
        overlays.validate()?;
        Ok(Self { features, overlays })
    }

    /// Returns a stylesheet holding the built-in table and overlays.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn features(&self) -> &StyleTable {
        &self.features
    }

    pub fn overlays(&self) -> &OverlayStyles {
        &self.overlays
    }

    pub fn into_parts(self) -> (StyleTable, OverlayStyles) {
        (self.features, self.overlays)
    }

    /// Parses and validates a stylesheet.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let raw: RawStyleSheet = serde_yaml::from_str(yaml)?;
        let entries = raw.features.len();
        let sheet = raw.build()?;
        debug!(
            entries,
            point_features = sheet
                .features
                .iter()
                .filter(|(_, style)| style.is_point_capable())
                .count(),
            zoom_floors = sheet
                .features
                .iter()
                .filter(|(_, style)| style.min_zoom().is_some())
                .count(),
            custom_overlays = sheet.overlays != *OverlayStyles::builtin(),
            "stylesheet parsed"
        );
        Ok(sheet)
    }

    /// Reads a stylesheet from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading stylesheet");
        let yaml = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Writes the stylesheet back out in the format [`StyleSheet::from_yaml`] reads.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml::to_string(&RawStyleSheet::from(self))?)
    }
}

impl StyleTable {
    /// Parses a stylesheet and keeps only its feature table.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        Ok(StyleSheet::from_yaml(yaml)?.features)
    }

    /// Reads a stylesheet from disk and keeps only its feature table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        Ok(StyleSheet::from_path(path)?.features)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyleSheet {
    #[serde(
        serialize_with = "serialize_entries",
        deserialize_with = "deserialize_entries"
    )]
    features: Vec<(String, RawFeatureStyle)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overlays: Option<RawOverlays>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFeatureStyle {
    color: String,
    stroke_width: f64,
    hover_stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hover_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_zoom: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOverlays {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    draw: Option<RawOverlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hover: Option<RawOverlay>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawOverlay {
    stroke_width: f64,
    stroke_color: String,
    fill_color: String,
    radius: f64,
    circle_color: String,
    circle_stroke_width: f64,
    circle_stroke_color: String,
}

fn serialize_entries<S: Serializer>(
    entries: &[(String, RawFeatureStyle)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(key, style)| (key, style)))
}

/// Reads the `features` mapping as entries in file order. A repeated key is
/// kept, so `StyleTable::new` reports it instead of the last one winning.
fn deserialize_entries<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, RawFeatureStyle)>, D::Error> {
    deserializer.deserialize_map(EntriesVisitor)
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Vec<(String, RawFeatureStyle)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of feature type to style")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl RawStyleSheet {
    fn build(self) -> Result<StyleSheet, StyleError> {
        let mut styles = Vec::with_capacity(self.features.len());
        for (key, raw) in self.features {
            let feature: FeatureType = key.parse()?;
            styles.push((feature, raw.build(feature)?));
        }
        let features = StyleTable::new(styles)?;

        let builtin = OverlayStyles::builtin();
        let overlays = match self.overlays {
            Some(raw) => OverlayStyles {
                draw: raw
                    .draw
                    .map(|o| o.build(OverlayKind::Draw))
                    .transpose()?
                    .unwrap_or(builtin.draw),
                hover: raw
                    .hover
                    .map(|o| o.build(OverlayKind::Hover))
                    .transpose()?
                    .unwrap_or(builtin.hover),
            },
            None => *builtin,
        };

        StyleSheet::new(features, overlays)
    }
}

impl RawFeatureStyle {
    fn build(self, feature: FeatureType) -> Result<StyleDefinition, StyleError> {
        let context = format!("{} color", feature);
        let color = parse_color(&context, &self.color)?;
        if !color.is_opaque() {
            return Err(StyleError::InvalidColor {
                context,
                source: ColorParseError::new(
                    self.color,
                    "feature colors must be opaque, state alphas are applied automatically",
                ),
            });
        }

        let mut style =
            StyleDefinition::new(color.triple(), self.stroke_width, self.hover_stroke_width);
        match (self.radius, self.hover_radius, self.select_radius) {
            (Some(radius), hover_radius, select_radius) => {
                style = style.with_point(PointRadii {
                    radius,
                    hover_radius,
                    select_radius,
                });
            }
            (None, None, None) => {}
            (None, _, _) => {
                return Err(StyleError::invalid(
                    feature,
                    "hoverRadius and selectRadius require radius",
                ));
            }
        }
        if let Some(min_zoom) = self.min_zoom {
            style = style.with_min_zoom(min_zoom);
        }
        Ok(style)
    }
}

impl RawOverlay {
    fn build(self, kind: OverlayKind) -> Result<OverlayStyle, StyleError> {
        let color = |field: &str, value: &str| {
            parse_color(&format!("{} overlay {}", kind, field), value)
        };
        Ok(OverlayStyle {
            stroke_width: self.stroke_width,
            stroke_color: color("strokeColor", &self.stroke_color)?,
            fill_color: color("fillColor", &self.fill_color)?,
            radius: self.radius,
            circle_color: color("circleColor", &self.circle_color)?,
            circle_stroke_width: self.circle_stroke_width,
            circle_stroke_color: color("circleStrokeColor", &self.circle_stroke_color)?,
        })
    }
}

fn parse_color(context: &str, value: &str) -> Result<Rgba, StyleError> {
    value.parse().map_err(|source| StyleError::InvalidColor {
        context: context.to_string(),
        source,
    })
}

impl From<&StyleSheet> for RawStyleSheet {
    fn from(sheet: &StyleSheet) -> Self {
        let features = sheet
            .features
            .iter()
            .map(|(feature, style)| (feature.as_str().to_string(), RawFeatureStyle::from(style)))
            .collect();
        Self {
            features,
            overlays: Some(RawOverlays {
                draw: Some(RawOverlay::from(&sheet.overlays.draw)),
                hover: Some(RawOverlay::from(&sheet.overlays.hover)),
            }),
        }
    }
}

impl From<&StyleDefinition> for RawFeatureStyle {
    fn from(style: &StyleDefinition) -> Self {
        let point = style.point();
        Self {
            color: Rgba::from_triple(style.rgb()).to_string(),
            stroke_width: style.stroke_width(),
            hover_stroke_width: style.hover_stroke_width(),
            radius: point.map(|p| p.radius),
            hover_radius: point.and_then(|p| p.hover_radius),
            select_radius: point.and_then(|p| p.select_radius),
            min_zoom: style.min_zoom(),
        }
    }
}

impl From<&OverlayStyle> for RawOverlay {
    fn from(style: &OverlayStyle) -> Self {
        Self {
            stroke_width: style.stroke_width,
            stroke_color: style.stroke_color.to_string(),
            fill_color: style.fill_color.to_string(),
            radius: style.radius,
            circle_color: style.circle_color.to_string(),
            circle_stroke_width: style.circle_stroke_width,
            circle_stroke_color: style.circle_stroke_color.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::InteractionState;

    const MINIMAL: &str = r#"
features:
  road: { color: blue, strokeWidth: 10, hoverStrokeWidth: 14, minZoom: 12 }
  address: { color: grey, strokeWidth: 4, hoverStrokeWidth: 8, radius: 4, hoverRadius: 6, selectRadius: 6, minZoom: 16.9 }
  placename: { color: red, strokeWidth: 10, hoverStrokeWidth: 14, radius: 6, hoverRadius: 8, selectRadius: 8, minZoom: 12 }
  lga: { color: orange, strokeWidth: 10, hoverStrokeWidth: 14 }
  locality: { color: green, strokeWidth: 10, hoverStrokeWidth: 14, minZoom: 10 }
"#;

    #[test]
    fn test_minimal_sheet_matches_builtin() {
        let sheet = StyleSheet::from_yaml(MINIMAL).unwrap();
        assert_eq!(sheet.features(), StyleTable::builtin());
        assert_eq!(sheet.overlays(), OverlayStyles::builtin());
    }

    #[test]
    fn test_builtin_round_trips() {
        let yaml = StyleSheet::builtin().to_yaml().unwrap();
        assert_eq!(StyleSheet::from_yaml(&yaml).unwrap(), StyleSheet::builtin());
    }

    #[test]
    fn test_unknown_feature_key() {
        let yaml = MINIMAL.replace("lga:", "river:");
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, StyleError::UnknownFeatureType(ref key) if key == "river"));
    }

    #[test]
    fn test_duplicate_feature_key() {
        let yaml = format!(
            "{}  road: {{ color: red, strokeWidth: 1, hoverStrokeWidth: 2 }}\n",
            MINIMAL
        );
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        match err {
            StyleError::Invalid { context, message } => {
                assert_eq!(context, "road");
                assert!(message.contains("more than once"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_features_keep_file_order() {
        let yaml = StyleSheet::builtin().to_yaml().unwrap();
        let raw: RawStyleSheet = serde_yaml::from_str(&yaml).unwrap();
        let keys: Vec<&str> = raw.features.iter().map(|(key, _)| key.as_str()).collect();
        let expected: Vec<&str> = FeatureType::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_missing_feature() {
        let yaml: String = MINIMAL
            .lines()
            .filter(|line| !line.trim_start().starts_with("locality:"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            StyleError::MissingFeatureType(FeatureType::Locality)
        ));
    }

    #[test]
    fn test_translucent_feature_color_rejected() {
        let yaml = MINIMAL.replace("color: blue", "color: \"rgba(0, 0, 255, 0.5)\"");
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidColor { ref context, .. } if context == "road color"
        ));
    }

    #[test]
    fn test_bad_color_rejected() {
        let yaml = MINIMAL.replace("color: orange", "color: bright-orange");
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidColor { ref context, .. } if context == "lga color"
        ));
    }

    #[test]
    fn test_hover_radius_without_radius() {
        let yaml = MINIMAL.replace(
            "lga: { color: orange,",
            "lga: { color: orange, hoverRadius: 3,",
        );
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, StyleError::Invalid { .. }));
    }

    #[test]
    fn test_radius_only_falls_back() {
        let yaml = MINIMAL.replace(
            "lga: { color: orange,",
            "lga: { color: orange, radius: 5,",
        );
        let table = StyleTable::from_yaml(&yaml).unwrap();
        let lga = table.get(FeatureType::Lga);
        assert_eq!(lga.radius_for(InteractionState::Selected), Some(5.0));
    }

    #[test]
    fn test_unknown_field_is_yaml_error() {
        let yaml = MINIMAL.replace("minZoom: 10", "minZoom: 10, maxZoom: 18");
        assert!(matches!(
            StyleSheet::from_yaml(&yaml).unwrap_err(),
            StyleError::Yaml(_)
        ));
    }

    #[test]
    fn test_partial_overlays_keep_builtin_hover() {
        let yaml = format!(
            "{}overlays:\n  draw: {{ strokeWidth: 3, strokeColor: red, fillColor: \"#ff000066\", radius: 5, circleColor: red, circleStrokeWidth: 0, circleStrokeColor: black }}\n",
            MINIMAL
        );
        let sheet = StyleSheet::from_yaml(&yaml).unwrap();
        assert_eq!(sheet.overlays().draw.stroke_width, 3.0);
        assert_eq!(sheet.overlays().draw.stroke_color, Rgba::rgb(255, 0, 0));
        assert_eq!(sheet.overlays().hover, OverlayStyles::builtin().hover);
    }

    #[test]
    fn test_bad_overlay_color_has_context() {
        let yaml = format!(
            "{}overlays:\n  hover: {{ strokeWidth: 4, strokeColor: bleu, fillColor: blue, radius: 6, circleColor: blue, circleStrokeWidth: 1, circleStrokeColor: black }}\n",
            MINIMAL
        );
        let err = StyleSheet::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().starts_with("hover overlay strokeColor"));
    }
}
