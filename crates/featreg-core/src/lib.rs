#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for featreg feature data files.
//!
//! Two layers:
//! - **Deserialization layer** ([`raw`]): 1:1 mapping to `*_features.json`
//! - **Analysis layer** ([`Catalog`]): merged, validated, sorted by
//!   case-insensitive name; a feature's position is its ordinal
//!
//! The catalog is consumed at compile time by `featreg-macros` to generate
//! the registry, and at run time by the CLI to check data files.

mod catalog;
pub mod raw;
pub mod utils;

#[cfg(test)]
mod catalog_tests;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, FeatureSpec, MAX_FEATURES, RESERVED_IDENTS};
pub use raw::{RawFeature, RawFeatureFile, parse_feature_file};

/// Environment variable through which the registry's build script hands the
/// data file list to the code generator.
pub const FEATURE_FILES_ENV: &str = "FEATREG_FEATURE_FILES";
