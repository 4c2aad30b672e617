use std::fmt::Write;
use std::path::PathBuf;

use featreg::Feature;
use featreg_core::Catalog;

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub against_registry: bool,
}

pub fn run(args: CheckArgs) {
    let catalog = match Catalog::from_paths(&args.files) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        features = catalog.len(),
        files = args.files.len(),
        "feature files are valid"
    );

    if args.against_registry {
        let drift = RegistryDrift::between(&catalog);
        if !drift.is_empty() {
            eprint!("{}", drift.render());
            std::process::exit(1);
        }
        tracing::info!("feature files match the compiled registry");
    }

    // No output on success; -v shows the info events.
}

/// Differences between data files and the registry this binary was built with.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RegistryDrift {
    /// Declared in the files, absent from the registry (catalog order).
    pub not_in_registry: Vec<String>,
    /// In the registry, absent from the files (ordinal order).
    pub not_in_files: Vec<&'static str>,
}

impl RegistryDrift {
    pub fn between(catalog: &Catalog) -> Self {
        let not_in_registry = catalog
            .names()
            .filter(|name| Feature::from_name(name).is_none())
            .map(str::to_owned)
            .collect();
        let not_in_files = Feature::all()
            .map(Feature::name)
            .filter(|name| catalog.position(name).is_none())
            .collect();

        Self {
            not_in_registry,
            not_in_files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.not_in_registry.is_empty() && self.not_in_files.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.not_in_registry.is_empty() {
            let _ = writeln!(
                out,
                "error: features missing from the compiled registry ({}):",
                self.not_in_registry.len()
            );
            for name in &self.not_in_registry {
                let _ = writeln!(out, "  {name}");
            }
        }
        if !self.not_in_files.is_empty() {
            let _ = writeln!(
                out,
                "error: registry features missing from the data files ({}):",
                self.not_in_files.len()
            );
            for name in &self.not_in_files {
                let _ = writeln!(out, "  {name}");
            }
        }
        if !self.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "hint: rebuild featreg after changing its data files");
        }
        out
    }
}
