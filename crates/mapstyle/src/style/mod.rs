//! Feature-type styles and their resolution.
//!
//! This module provides:
//!
//! - [`FeatureType`] and [`InteractionState`]: the two inputs to resolution
//! - [`StyleDefinition`]: one feature type's style across all states
//! - [`StyleTable`]: one definition per feature type
//! - [`ResolvedStyle`]: what a renderer draws with
//! - [`StyleError`]: lookup and validation errors

mod definition;
mod error;
mod feature;
mod table;

pub(crate) use definition::check_positive;
pub use definition::{PointRadii, ResolvedStyle, StyleDefinition};
pub use error::StyleError;
pub use feature::{FeatureType, InteractionState};
pub use table::StyleTable;
