#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Closed registry of feature-toggle identifiers.
//!
//! [`Feature`] is generated at compile time from `data/*_features.json`:
//! one variant per declared feature, sorted case-insensitively, with the
//! variant's discriminant as its ordinal. Every lookup is a read of static
//! tables, so the registry needs no initialization and is safe to query from
//! any thread.
//!
//! ```
//! use featreg::{Feature, feature_name};
//!
//! assert_eq!(Feature::AllowAstcFormats.name(), "AllowAstcFormats");
//! assert_eq!(feature_name(None), "InvalidEnum");
//! assert_eq!(Feature::from_name_ignore_case("allowAstcFormats"), Some(Feature::AllowAstcFormats));
//! ```

mod error;
mod feature;


pub use error::FeatureError;
pub use feature::{Feature, FeatureInfo, INVALID_FEATURE_NAME, feature_name, feature_name_by_ordinal};
