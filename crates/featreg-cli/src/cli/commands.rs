//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("featreg")
        .about("Inspect the feature registry and its data files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(list_command())
        .subcommand(name_command())
        .subcommand(lookup_command())
        .subcommand(check_command())
}

/// List every feature with its ordinal.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List all features")
        .after_help(
            r#"EXAMPLES:
  featreg list
  featreg list --json"#,
        )
        .arg(json_arg())
        .arg(category_arg())
}

/// Resolve ordinals to names.
pub fn name_command() -> Command {
    Command::new("name")
        .about("Print the name of each feature ordinal")
        .after_help(
            r#"EXAMPLES:
  featreg name 4
  featreg name 0 1 2"#,
        )
        .arg(ordinals_arg())
}

/// Resolve names to ordinals.
pub fn lookup_command() -> Command {
    Command::new("lookup")
        .about("Find features by name")
        .after_help(
            r#"EXAMPLES:
  featreg lookup AllowAstcFormats
  featreg lookup allowAstcFormats zeroMaxLodWorkaround
  featreg lookup --exact AllowAstcFormats"#,
        )
        .arg(names_arg())
        .arg(exact_arg())
}

/// Validate feature data files.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate feature data files")
        .after_help(
            r#"EXAMPLES:
  featreg check data/vk_features.json
  featreg check data/*_features.json --against-registry"#,
        )
        .arg(files_arg())
        .arg(against_registry_arg())
}
