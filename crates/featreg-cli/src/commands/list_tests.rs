use featreg::Feature;

use super::list::{render_json, render_text, select};

#[test]
fn select_all_without_category() {
    let features = select(None);
    assert_eq!(features.len(), Feature::COUNT);
    assert_eq!(features.first(), Some(&Feature::AddAndTrueToLoopCondition));
    assert_eq!(features.last(), Some(&Feature::ZeroMaxLodWorkaround));
}

#[test]
fn select_unknown_category_is_empty() {
    assert!(select(Some("no-such-category")).is_empty());
}

#[test]
fn text_table() {
    let out = render_text(&[Feature::AllowAstcFormats, Feature::ZeroMaxLodWorkaround]);
    assert_eq!(
        out,
        "Features (2):\n    4  AllowAstcFormats\n  280  ZeroMaxLodWorkaround\n"
    );
}

#[test]
fn text_table_empty() {
    assert_eq!(render_text(&[]), "Features (0):\n");
}

#[test]
fn json_rows() {
    let json = render_json(&[Feature::AllowAstcFormats]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ordinal"], 4);
    assert_eq!(rows[0]["name"], "AllowAstcFormats");
    assert_eq!(rows[0]["source_name"], "allowAstcFormats");
    assert!(rows[0]["category"].is_null());
    assert!(rows[0]["bug"].is_null());
    assert_eq!(rows[0]["description"], "");
}

#[test]
fn help_examples_use_shipped_categories() {
    let cli = crate::cli::build_cli();
    let list = cli.find_subcommand("list").unwrap();
    let help = list.get_after_help().unwrap().to_string();

    for line in help.lines() {
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word == "--category" {
                let category = words.next().unwrap();
                assert!(!select(Some(category)).is_empty(), "no features in category '{category}'");
            }
        }
    }
}
