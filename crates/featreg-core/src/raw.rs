//! Deserialization layer: 1:1 mapping to `*_features.json`.

use serde::Deserialize;

/// One feature data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeatureFile {
    /// Free-form header lines (copyright, purpose). Not carried into the registry.
    #[serde(default)]
    pub description: Vec<String>,
    pub features: Vec<RawFeature>,
}

/// Feature definition as written in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub bug: Option<String>,
}

/// Parse `*_features.json` content.
pub fn parse_feature_file(json: &str) -> Result<RawFeatureFile, serde_json::Error> {
    serde_json::from_str(json)
}
