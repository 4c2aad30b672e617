//! Analysis layer: merged, validated and sorted feature specs.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::raw::{RawFeature, parse_feature_file};
use crate::utils::{is_valid_feature_name, is_valid_ident, sort_key, to_feature_ident};

/// Identifiers the registry reserves for itself.
///
/// `InvalidEnum` is the name reported for "no feature", so a real feature
/// spelled that way would be indistinguishable from the marker. `COUNT` and
/// `ALL` are associated constants generated on `Feature`.
pub const RESERVED_IDENTS: &[&str] = &["InvalidEnum", "EnumCount", "Self", "COUNT", "ALL"];

/// Upper bound imposed by the `u16` discriminants of the generated enum.
pub const MAX_FEATURES: usize = u16::MAX as usize + 1;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid feature file {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin}: feature #{index} has an empty name")]
    EmptyName { origin: String, index: usize },
    #[error("{origin}: invalid feature name '{name}'")]
    InvalidName { origin: String, name: String },
    #[error("{origin}: feature name '{name}' is reserved")]
    ReservedName { origin: String, name: String },
    #[error("{origin}: feature '{name}' is declared more than once")]
    Duplicate { origin: String, name: String },
    #[error("{origin}: feature '{name}' differs only in case from '{existing}' ({existing_origin})")]
    Collision {
        origin: String,
        name: String,
        existing: String,
        existing_origin: String,
    },
    #[error("no features declared")]
    Empty,
    #[error("too many features: {count} (maximum {MAX_FEATURES})")]
    TooMany { count: usize },
}

/// A validated feature, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Enumerator spelling, also the canonical name (`AllowAstcFormats`).
    pub ident: String,
    /// Name as written in the data file (`allowAstcFormats`).
    pub source_name: String,
    pub category: Option<String>,
    /// Description lines joined with a single space.
    pub description: String,
    pub bug: Option<String>,
    /// Data file that declared the feature first.
    pub origin: String,
}

/// Closed, case-insensitively sorted set of features.
///
/// Position in the catalog is the feature's ordinal.
#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<FeatureSpec>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Load and merge every file in `paths`, in order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, CatalogError> {
        let mut builder = Self::builder();
        for path in paths {
            builder.add_file(path.as_ref())?;
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&FeatureSpec> {
        self.features.get(ordinal)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FeatureSpec> {
        self.features.iter()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.features.iter().map(|f| f.ident.as_str())
    }

    /// Ordinal of the feature with exactly this identifier.
    pub fn position(&self, ident: &str) -> Option<usize> {
        let key = sort_key(ident);
        self.features
            .binary_search_by(|f| sort_key(&f.ident).cmp(&key))
            .ok()
            .filter(|&i| self.features[i].ident == ident)
    }
}

/// Accumulates data files, merging features by identifier.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    /// Keyed by lowercased identifier so case-only collisions meet in one slot.
    entries: IndexMap<String, FeatureSpec>,
}

impl CatalogBuilder {
    pub fn add_file(&mut self, path: &Path) -> Result<&mut Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loading feature file");
        self.add_json(&path.display().to_string(), &json)
    }

    /// Add the features of one data file. `origin` names it in diagnostics.
    pub fn add_json(&mut self, origin: &str, json: &str) -> Result<&mut Self, CatalogError> {
        let file = parse_feature_file(json).map_err(|source| CatalogError::Json {
            origin: origin.to_owned(),
            source,
        })?;

        let before = self.entries.len();
        for (index, raw) in file.features.into_iter().enumerate() {
            self.add_feature(origin, index, raw)?;
        }
        tracing::debug!(
            origin,
            added = self.entries.len() - before,
            total = self.entries.len(),
            "merged feature file"
        );
        Ok(self)
    }

    fn add_feature(&mut self, origin: &str, index: usize, raw: RawFeature) -> Result<(), CatalogError> {
        if raw.name.is_empty() {
            return Err(CatalogError::EmptyName {
                origin: origin.to_owned(),
                index,
            });
        }
        let ident = to_feature_ident(&raw.name);
        if !is_valid_feature_name(&raw.name) || !is_valid_ident(&ident) {
            return Err(CatalogError::InvalidName {
                origin: origin.to_owned(),
                name: raw.name,
            });
        }
        if RESERVED_IDENTS.contains(&ident.as_str()) {
            return Err(CatalogError::ReservedName {
                origin: origin.to_owned(),
                name: raw.name,
            });
        }

        match self.entries.entry(sort_key(&ident)) {
            Entry::Occupied(slot) => {
                let existing = slot.get();
                if existing.ident != ident {
                    return Err(CatalogError::Collision {
                        origin: origin.to_owned(),
                        name: raw.name,
                        existing: existing.source_name.clone(),
                        existing_origin: existing.origin.clone(),
                    });
                }
                if existing.origin == origin {
                    return Err(CatalogError::Duplicate {
                        origin: origin.to_owned(),
                        name: raw.name,
                    });
                }
                tracing::debug!(
                    feature = %ident,
                    first = %existing.origin,
                    again = origin,
                    "feature declared in several files; keeping first"
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(FeatureSpec {
                    ident,
                    source_name: raw.name,
                    category: raw.category.filter(|c| !c.is_empty()),
                    description: raw.description.join(" "),
                    bug: raw.bug.filter(|b| !b.is_empty()),
                    origin: origin.to_owned(),
                });
            }
        }
        Ok(())
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if self.entries.len() > MAX_FEATURES {
            return Err(CatalogError::TooMany {
                count: self.entries.len(),
            });
        }

        let mut entries = self.entries;
        entries.sort_unstable_keys();
        let features: Vec<FeatureSpec> = entries.into_values().collect();
        tracing::debug!(count = features.len(), "feature catalog built");
        Ok(Catalog { features })
    }
}
