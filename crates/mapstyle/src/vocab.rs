//! Address-part vocabulary IRIs.
//!
//! These identify the parts of a structured address (building name, street
//! number, locality, ...) in the address-part-types vocabulary. They carry no
//! styling behavior; address labeling code uses them as keys.

use std::fmt;

/// Namespace shared by every address-part IRI.
pub const ADDR_PART_NS: &str = "https://linked.data.gov.au/def/addr-part-types/";

pub const GEOGRAPHICAL_NAME_OBJECT_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/geographicName";
pub const PROPERTY_NAME_PART: &str = "https://linked.data.gov.au/def/addr-part-types/propertyName";
pub const BUILDING_NAME_PART: &str = "https://linked.data.gov.au/def/addr-part-types/buildingName";
pub const SUBADDRESS_TYPE_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/subaddressType";
pub const SUBADDRESS_NUMBER_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/subaddressNumber";
pub const SUBADDRESS_NUMBER_SUFFIX_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/subaddressNumberSuffix";
pub const BUILDING_LEVEL_TYPE_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/buildingLevelType";
pub const BUILDING_LEVEL_NUMBER_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/buildingLevelNumber";
pub const BUILDING_LEVEL_NUMBER_SUFFIX_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/buildingLevelNumberSuffix";
pub const STREET_NUMBER_FIRST_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/addressNumberFirst";
pub const STREET_NUMBER_FIRST_SUFFIX_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/addressNumberFirstSuffix";
pub const STREET_NUMBER_LAST_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/addressNumberLast";
pub const STREET_NUMBER_LAST_SUFFIX_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/addressNumberLastSuffix";
pub const STREET_PART: &str = "https://linked.data.gov.au/def/addr-part-types/road";
pub const LOCALITY_PART: &str = "https://linked.data.gov.au/def/addr-part-types/locality";
pub const STATE_OR_TERRITORY_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/stateOrTerritory";
pub const POSTCODE_PART: &str = "https://linked.data.gov.au/def/addr-part-types/postcode";

/// Water features are numbered with the same part as street addresses.
pub const WATER_FEATURE_NUMBER_PART: &str = STREET_NUMBER_FIRST_PART;
pub const WATER_FEATURE_NAME_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/waterFeature";
pub const WATER_FEATURE_TYPE_PART: &str =
    "https://linked.data.gov.au/def/addr-part-types/waterFeatureType";

/// A named address part.
///
/// `WaterFeatureNumber` and `StreetNumberFirst` share an IRI; looking that
/// IRI up yields `StreetNumberFirst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressPart {
    GeographicalNameObject,
    PropertyName,
    BuildingName,
    SubaddressType,
    SubaddressNumber,
    SubaddressNumberSuffix,
    BuildingLevelType,
    BuildingLevelNumber,
    BuildingLevelNumberSuffix,
    StreetNumberFirst,
    StreetNumberFirstSuffix,
    StreetNumberLast,
    StreetNumberLastSuffix,
    Street,
    Locality,
    StateOrTerritory,
    Postcode,
    WaterFeatureNumber,
    WaterFeatureName,
    WaterFeatureType,
}

impl AddressPart {
    pub const ALL: [AddressPart; 20] = [
        AddressPart::GeographicalNameObject,
        AddressPart::PropertyName,
        AddressPart::BuildingName,
        AddressPart::SubaddressType,
        AddressPart::SubaddressNumber,
        AddressPart::SubaddressNumberSuffix,
        AddressPart::BuildingLevelType,
        AddressPart::BuildingLevelNumber,
        AddressPart::BuildingLevelNumberSuffix,
        AddressPart::StreetNumberFirst,
        AddressPart::StreetNumberFirstSuffix,
        AddressPart::StreetNumberLast,
        AddressPart::StreetNumberLastSuffix,
        AddressPart::Street,
        AddressPart::Locality,
        AddressPart::StateOrTerritory,
        AddressPart::Postcode,
        AddressPart::WaterFeatureNumber,
        AddressPart::WaterFeatureName,
        AddressPart::WaterFeatureType,
    ];

    pub fn iri(self) -> &'static str {
        match self {
            AddressPart::GeographicalNameObject => GEOGRAPHICAL_NAME_OBJECT_PART,
            AddressPart::PropertyName => PROPERTY_NAME_PART,
            AddressPart::BuildingName => BUILDING_NAME_PART,
            AddressPart::SubaddressType => SUBADDRESS_TYPE_PART,
            AddressPart::SubaddressNumber => SUBADDRESS_NUMBER_PART,
            AddressPart::SubaddressNumberSuffix => SUBADDRESS_NUMBER_SUFFIX_PART,
            AddressPart::BuildingLevelType => BUILDING_LEVEL_TYPE_PART,
            AddressPart::BuildingLevelNumber => BUILDING_LEVEL_NUMBER_PART,
            AddressPart::BuildingLevelNumberSuffix => BUILDING_LEVEL_NUMBER_SUFFIX_PART,
            AddressPart::StreetNumberFirst => STREET_NUMBER_FIRST_PART,
            AddressPart::StreetNumberFirstSuffix => STREET_NUMBER_FIRST_SUFFIX_PART,
            AddressPart::StreetNumberLast => STREET_NUMBER_LAST_PART,
            AddressPart::StreetNumberLastSuffix => STREET_NUMBER_LAST_SUFFIX_PART,
            AddressPart::Street => STREET_PART,
            AddressPart::Locality => LOCALITY_PART,
            AddressPart::StateOrTerritory => STATE_OR_TERRITORY_PART,
            AddressPart::Postcode => POSTCODE_PART,
            AddressPart::WaterFeatureNumber => WATER_FEATURE_NUMBER_PART,
            AddressPart::WaterFeatureName => WATER_FEATURE_NAME_PART,
            AddressPart::WaterFeatureType => WATER_FEATURE_TYPE_PART,
        }
    }

    /// Finds the part identified by `iri`. The first match in
    /// [`AddressPart::ALL`] wins.
    pub fn from_iri(iri: &str) -> Option<AddressPart> {
        AddressPart::ALL.into_iter().find(|part| part.iri() == iri)
    }

    /// The local name of the IRI, e.g. `"buildingName"`.
    pub fn local_name(self) -> &'static str {
        self.iri().trim_start_matches(ADDR_PART_NS)
    }

    pub fn is_water_feature(self) -> bool {
        matches!(
            self,
            AddressPart::WaterFeatureNumber
                | AddressPart::WaterFeatureName
                | AddressPart::WaterFeatureType
        )
    }
}

impl fmt::Display for AddressPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri())
    }
}
