//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that the command builders compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Feature ordinals (positional, one or more).
pub fn ordinals_arg() -> Arg {
    Arg::new("ordinals")
        .value_name("ORDINAL")
        .value_parser(value_parser!(usize))
        .num_args(1..)
        .required(true)
        .help("Feature ordinals to resolve")
}

/// Feature names (positional, one or more).
pub fn names_arg() -> Arg {
    Arg::new("names")
        .value_name("NAME")
        .num_args(1..)
        .required(true)
        .help("Feature names to resolve")
}

/// Feature data files (positional, one or more).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Feature data files (*_features.json)")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

/// Category filter (--category).
pub fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .value_name("CATEGORY")
        .help("Only show features in this category (case-insensitive)")
}

/// Require the canonical spelling (--exact).
pub fn exact_arg() -> Arg {
    Arg::new("exact")
        .long("exact")
        .action(ArgAction::SetTrue)
        .help("Match names exactly instead of ignoring case")
}

/// Compare data files with the compiled registry (--against-registry).
pub fn against_registry_arg() -> Arg {
    Arg::new("against_registry")
        .long("against-registry")
        .action(ArgAction::SetTrue)
        .help("Also report differences from the compiled-in registry")
}

/// Verbosity (-v, repeatable, global).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for info, -vv for debug, -vvv for trace)")
}
