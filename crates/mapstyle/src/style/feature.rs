//! Feature types and interaction states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StyleError;

/// Classification of a map entity, driving which style it gets.
///
/// The set is closed: every table holds exactly one style per variant, so
/// lookups by `FeatureType` cannot fail. String keys coming from outside
/// (layer names, stylesheet keys) go through [`FromStr`], which rejects
/// anything else with [`StyleError::UnknownFeatureType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Road,
    Address,
    Placename,
    /// Local government area.
    Lga,
    Locality,
}

impl FeatureType {
    /// All feature types, in table order.
    pub const ALL: [FeatureType; 5] = [
        FeatureType::Road,
        FeatureType::Address,
        FeatureType::Placename,
        FeatureType::Lga,
        FeatureType::Locality,
    ];

    /// Returns the key used for this type in layer names and stylesheets.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureType::Road => "road",
            FeatureType::Address => "address",
            FeatureType::Placename => "placename",
            FeatureType::Lga => "lga",
            FeatureType::Locality => "locality",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureType::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| StyleError::UnknownFeatureType(s.to_string()))
    }
}

/// The rendering mode a feature is drawn in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    /// Default appearance.
    #[default]
    Base,
    /// Pointer is over the feature.
    Hover,
    /// The user picked the feature.
    Selected,
}

impl InteractionState {
    /// All states, from least to most emphasized.
    pub const ALL: [InteractionState; 3] = [
        InteractionState::Base,
        InteractionState::Hover,
        InteractionState::Selected,
    ];

    /// Returns the lowercase name of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionState::Base => "base",
            InteractionState::Hover => "hover",
            InteractionState::Selected => "selected",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_type_from_str() {
        for feature in FeatureType::ALL {
            assert_eq!(feature.as_str().parse::<FeatureType>().unwrap(), feature);
        }
    }

    #[test]
    fn test_feature_type_unknown() {
        let err = "unknown".parse::<FeatureType>().unwrap_err();
        assert!(matches!(err, StyleError::UnknownFeatureType(ref key) if key == "unknown"));
    }

    #[test]
    fn test_feature_type_is_case_sensitive() {
        assert!("Road".parse::<FeatureType>().is_err());
    }

    #[test]
    fn test_feature_type_serde_names() {
        let json = serde_json::to_string(&FeatureType::Placename).unwrap();
        assert_eq!(json, "\"placename\"");
        let lga: FeatureType = serde_json::from_str("\"lga\"").unwrap();
        assert_eq!(lga, FeatureType::Lga);
    }

    #[test]
    fn test_interaction_state_default_is_base() {
        assert_eq!(InteractionState::default(), InteractionState::Base);
    }

    #[test]
    fn test_interaction_state_display() {
        assert_eq!(InteractionState::Selected.to_string(), "selected");
    }
}
