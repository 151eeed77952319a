//! Style lookup and stylesheet errors.

use std::path::PathBuf;

use crate::color::ColorParseError;

use super::feature::FeatureType;

/// Error returned by style lookups and stylesheet loading.
///
/// None of these are transient: each one points at a caller or
/// configuration defect and should be surfaced immediately.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A string key is not one of the known feature types.
    #[error("unknown feature type '{0}'")]
    UnknownFeatureType(String),

    /// A table was built without a style for this feature type.
    #[error("no style defined for feature type '{0}'")]
    MissingFeatureType(FeatureType),

    /// A color value failed to parse or is not usable where it appears.
    #[error("{context}: {source}")]
    InvalidColor {
        context: String,
        #[source]
        source: ColorParseError,
    },

    /// A numeric style attribute breaks a table invariant.
    #[error("invalid style for {context}: {message}")]
    Invalid { context: String, message: String },

    #[error("failed to parse stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StyleError {
    pub(crate) fn invalid(context: impl ToString, message: impl Into<String>) -> Self {
        StyleError::Invalid {
            context: context.to_string(),
            message: message.into(),
        }
    }
}
