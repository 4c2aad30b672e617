use std::fmt::Write;

use featreg::Feature;
use serde::Serialize;

pub struct ListArgs {
    pub json: bool,
    pub category: Option<String>,
}

/// One row of `featreg list --json`.
#[derive(Debug, Serialize)]
pub struct FeatureRow {
    pub ordinal: usize,
    pub name: &'static str,
    pub source_name: &'static str,
    pub category: Option<&'static str>,
    pub description: &'static str,
    pub bug: Option<&'static str>,
}

impl From<Feature> for FeatureRow {
    fn from(feature: Feature) -> Self {
        let info = feature.info();
        Self {
            ordinal: feature.ordinal(),
            name: info.name,
            source_name: info.source_name,
            category: info.category,
            description: info.description,
            bug: info.bug,
        }
    }
}

pub fn run(args: ListArgs) {
    let features = select(args.category.as_deref());
    tracing::debug!(shown = features.len(), total = Feature::COUNT, "listing features");

    if args.json {
        match render_json(&features) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize features: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_text(&features));
    }
}

/// Features in ordinal order, optionally restricted to one category.
pub fn select(category: Option<&str>) -> Vec<Feature> {
    Feature::all()
        .filter(|feature| match category {
            Some(wanted) => feature
                .category()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
            None => true,
        })
        .collect()
}

pub fn render_text(features: &[Feature]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Features ({}):", features.len());
    for feature in features {
        let _ = writeln!(out, "  {:>3}  {}", feature.ordinal(), feature);
    }
    out
}

pub fn render_json(features: &[Feature]) -> serde_json::Result<String> {
    let rows: Vec<FeatureRow> = features.iter().copied().map(FeatureRow::from).collect();
    serde_json::to_string_pretty(&rows)
}
