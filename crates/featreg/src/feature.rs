use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::FeatureError;

/// Static description of one feature, as declared in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureInfo {
    /// Canonical name, identical to the variant spelling.
    pub name: &'static str,
    /// Name as written in the data file (usually camelCase).
    pub source_name: &'static str,
    pub category: Option<&'static str>,
    /// Empty when the data file has none.
    pub description: &'static str,
    pub bug: Option<&'static str>,
}

featreg_macros::generate_feature_table!();

/// Name reported for "no feature". Reserved, so no data file can declare it.
pub const INVALID_FEATURE_NAME: &str = "InvalidEnum";

impl Feature {
    /// Dense position in `0..Feature::COUNT`.
    pub const fn ordinal(self) -> usize {
        self as u16 as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Result<Self, FeatureError> {
        Self::ALL.get(ordinal).copied().ok_or(FeatureError::OutOfRange {
            ordinal,
            count: Self::COUNT,
        })
    }

    /// Canonical name, e.g. `"AllowAstcFormats"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> &'static FeatureInfo {
        &FEATURE_INFOS[self.ordinal()]
    }

    pub fn source_name(self) -> &'static str {
        self.info().source_name
    }

    pub fn category(self) -> Option<&'static str> {
        self.info().category
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn bug(self) -> Option<&'static str> {
        self.info().bug
    }

    /// All features in ordinal order.
    pub fn all() -> impl ExactSizeIterator<Item = Feature> + DoubleEndedIterator {
        Self::ALL.into_iter()
    }

    /// Exact lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::search(name).filter(|feature| feature.name() == name)
    }

    /// Lookup ignoring ASCII case, so data-file spellings such as
    /// `"allowAstcFormats"` resolve too.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::search(name)
    }

    // The table is sorted case-insensitively and names that differ only in
    // case are rejected at generation time, so at most one entry matches.
    fn search(name: &str) -> Option<Self> {
        FEATURE_INFOS
            .binary_search_by(|info| cmp_ignore_ascii_case(info.name, name))
            .ok()
            .map(|ordinal| Self::ALL[ordinal])
    }
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Name of `feature`, or [`INVALID_FEATURE_NAME`] for `None`.
pub fn feature_name(feature: Option<Feature>) -> &'static str {
    feature.map_or(INVALID_FEATURE_NAME, Feature::name)
}

/// Name of the feature at `ordinal`.
///
/// There is no sentinel ordinal: `Feature::COUNT` itself is out of range.
pub fn feature_name_by_ordinal(ordinal: usize) -> Result<&'static str, FeatureError> {
    Feature::from_ordinal(ordinal).map(Feature::name)
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name_ignore_case(s).ok_or_else(|| FeatureError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<usize> for Feature {
    type Error = FeatureError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<Feature> for usize {
    fn from(feature: Feature) -> Self {
        feature.ordinal()
    }
}
