/// Failure to resolve a feature.
///
/// Both variants mean the caller and the generated registry disagree about
/// the feature set; they are reported, never papered over with a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("feature ordinal {ordinal} out of range (registry has {count} features)")]
    OutOfRange { ordinal: usize, count: usize },
    #[error("unknown feature name '{0}'")]
    UnknownName(String),
}
