//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Each `*Params` struct mirrors the matching command `*Args` and is
//! populated by `from_matches()`; `Into<*Args>` bridges to the handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::list::ListArgs;
use crate::commands::lookup::LookupArgs;
use crate::commands::name::NameArgs;

/// Verbosity from the global `-v` flag.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

pub struct ListParams {
    pub json: bool,
    pub category: Option<String>,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            category: m.get_one::<String>("category").cloned(),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            json: p.json,
            category: p.category,
        }
    }
}

pub struct NameParams {
    pub ordinals: Vec<usize>,
}

impl NameParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ordinals: m
                .get_many::<usize>("ordinals")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<NameParams> for NameArgs {
    fn from(p: NameParams) -> Self {
        Self {
            ordinals: p.ordinals,
        }
    }
}

pub struct LookupParams {
    pub names: Vec<String>,
    pub exact: bool,
}

impl LookupParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            names: m
                .get_many::<String>("names")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            exact: m.get_flag("exact"),
        }
    }
}

impl From<LookupParams> for LookupArgs {
    fn from(p: LookupParams) -> Self {
        Self {
            names: p.names,
            exact: p.exact,
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub against_registry: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            against_registry: m.get_flag("against_registry"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            against_registry: p.against_registry,
        }
    }
}
