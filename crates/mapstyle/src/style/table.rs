//! The feature-type style table.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::definition::{PointRadii, ResolvedStyle, StyleDefinition};
use super::error::StyleError;
use super::feature::{FeatureType, InteractionState};

/// Built-in styles: blue roads, grey addresses, red place names, orange
/// local government areas and green localities.
static BUILTIN: StyleTable = StyleTable {
    road: StyleDefinition::new((0, 0, 255), 10.0, 14.0).with_min_zoom(12.0),
    address: StyleDefinition::new((128, 128, 128), 4.0, 8.0)
        .with_point(PointRadii::new(4.0, 6.0, 6.0))
        .with_min_zoom(16.9),
    placename: StyleDefinition::new((255, 0, 0), 10.0, 14.0)
        .with_point(PointRadii::new(6.0, 8.0, 8.0))
        .with_min_zoom(12.0),
    lga: StyleDefinition::new((255, 165, 0), 10.0, 14.0),
    locality: StyleDefinition::new((0, 128, 0), 10.0, 14.0).with_min_zoom(10.0),
};

/// One style per [`FeatureType`].
///
/// A table is immutable once built. The built-in table is a `static`, and
/// tables loaded from a stylesheet are meant to be built once at start-up
/// and shared by reference (or `Arc`) with every renderer.
///
/// # Example
///
/// ```rust
/// use mapstyle::{FeatureType, InteractionState, StyleTable};
///
/// let table = StyleTable::builtin();
/// let road = table.resolve(FeatureType::Road, InteractionState::Hover);
/// assert_eq!(road.stroke_width, 14.0);
///
/// assert!(table.is_visible_at_zoom(FeatureType::Road, 12.0));
/// assert!(!table.is_visible_at_zoom(FeatureType::Road, 11.9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    road: StyleDefinition,
    address: StyleDefinition,
    placename: StyleDefinition,
    lga: StyleDefinition,
    locality: StyleDefinition,
}

impl StyleTable {
    /// Returns the built-in table.
    pub fn builtin() -> &'static StyleTable {
        &BUILTIN
    }

    /// Builds a table from `(feature, style)` pairs.
    ///
    /// Every feature type must appear exactly once and every style must pass
    /// [`StyleDefinition::validate`].
    pub fn new<I>(styles: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (FeatureType, StyleDefinition)>,
    {
        let mut slots: [Option<StyleDefinition>; 5] = Default::default();
        for (feature, style) in styles {
            style.validate(feature)?;
            let slot = &mut slots[slot_index(feature)];
            if slot.is_some() {
                return Err(StyleError::invalid(feature, "defined more than once"));
            }
            *slot = Some(style);
        }

        let mut take = |feature: FeatureType| {
            slots[slot_index(feature)]
                .take()
                .ok_or(StyleError::MissingFeatureType(feature))
        };
        Ok(Self {
            road: take(FeatureType::Road)?,
            address: take(FeatureType::Address)?,
            placename: take(FeatureType::Placename)?,
            lga: take(FeatureType::Lga)?,
            locality: take(FeatureType::Locality)?,
        })
    }

    /// Returns the style for `feature`.
    pub fn get(&self, feature: FeatureType) -> &StyleDefinition {
        match feature {
            FeatureType::Road => &self.road,
            FeatureType::Address => &self.address,
            FeatureType::Placename => &self.placename,
            FeatureType::Lga => &self.lga,
            FeatureType::Locality => &self.locality,
        }
    }

    /// Looks up a style by its string key (`"road"`, `"lga"`, ...).
    pub fn get_by_name(&self, key: &str) -> Result<&StyleDefinition, StyleError> {
        Ok(self.get(key.parse()?))
    }

    pub fn resolve(&self, feature: FeatureType, state: InteractionState) -> ResolvedStyle {
        self.get(feature).resolve(state)
    }

    pub fn is_visible_at_zoom(&self, feature: FeatureType, zoom: f64) -> bool {
        self.get(feature).is_visible_at_zoom(zoom)
    }

    /// Iterates over all styles in [`FeatureType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureType, &StyleDefinition)> + '_ {
        FeatureType::ALL
            .into_iter()
            .map(move |feature| (feature, self.get(feature)))
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

fn slot_index(feature: FeatureType) -> usize {
    match feature {
        FeatureType::Road => 0,
        FeatureType::Address => 1,
        FeatureType::Placename => 2,
        FeatureType::Lga => 3,
        FeatureType::Locality => 4,
    }
}

/// Serializes as a map keyed by feature type, matching the layer-style
/// object a web map expects.
impl Serialize for StyleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FeatureType::ALL.len()))?;
        for (feature, style) in self.iter() {
            map.serialize_entry(feature.as_str(), style)?;
        }
        map.end()
    }
}
