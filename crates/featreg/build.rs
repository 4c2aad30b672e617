use std::path::{Path, PathBuf};

const FEATURE_FILES_ENV: &str = "FEATREG_FEATURE_FILES";
const FEATURE_FILE_SUFFIX: &str = "_features.json";

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let data_dir = PathBuf::from(&manifest_dir).join("data");

    let feature_files = collect_feature_files(&data_dir);
    if feature_files.is_empty() {
        panic!(
            "no *{FEATURE_FILE_SUFFIX} files found in {}",
            data_dir.display()
        );
    }

    let joined = std::env::join_paths(&feature_files).expect("feature file path contains a separator");
    let joined = joined
        .into_string()
        .expect("feature file paths must be valid UTF-8");
    println!("cargo::rustc-env={FEATURE_FILES_ENV}={joined}");

    for path in &feature_files {
        println!("cargo::rerun-if-changed={}", path.display());
    }

    // Picks up added or removed data files.
    println!("cargo::rerun-if-changed={}", data_dir.display());
    println!("cargo::rerun-if-changed=build.rs");
}

fn collect_feature_files(data_dir: &Path) -> Vec<PathBuf> {
    let entries = std::fs::read_dir(data_dir)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", data_dir.display()));

    let mut files: Vec<PathBuf> = entries
        .map(|entry| entry.expect("failed to read data directory entry").path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(FEATURE_FILE_SUFFIX))
        })
        .collect();

    // Merge order decides which file wins for features declared twice.
    files.sort();
    files
}
