use std::io::Write;

use crate::{Catalog, CatalogError, MAX_FEATURES, parse_feature_file};

fn build(files: &[(&str, &str)]) -> Result<Catalog, CatalogError> {
    let mut builder = Catalog::builder();
    for (origin, json) in files {
        builder.add_json(origin, json)?;
    }
    builder.build()
}

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.names().collect()
}

#[test]
fn parse_raw_file() {
    let file = parse_feature_file(
        r#"{
            "description": ["header"],
            "features": [
                {
                    "name": "allowAstcFormats",
                    "category": "Features",
                    "description": ["Enable ASTC", "on capable devices"],
                    "bug": "http://example.test/1"
                },
                { "name": "zeroMaxLodWorkaround" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(file.description, ["header"]);
    assert_eq!(file.features.len(), 2);
    assert_eq!(file.features[0].category.as_deref(), Some("Features"));
    assert_eq!(file.features[1].bug, None);
    assert!(file.features[1].description.is_empty());
}

#[test]
fn sorted_case_insensitively() {
    let catalog = build(&[(
        "a.json",
        r#"{"features": [
            {"name": "zeroMaxLodWorkaround"},
            {"name": "allowGenMultipleMipsPerPass"},
            {"name": "allowGenerateMipmapWithCompute"},
            {"name": "RGBA4IsNotSupportedForColorRendering"},
            {"name": "allowETCFormats"},
            {"name": "allowES3OnFL100"}
        ]}"#,
    )])
    .unwrap();

    assert_eq!(
        names(&catalog),
        [
            "AllowES3OnFL100",
            "AllowETCFormats",
            "AllowGenerateMipmapWithCompute",
            "AllowGenMultipleMipsPerPass",
            "RGBA4IsNotSupportedForColorRendering",
            "ZeroMaxLodWorkaround",
        ]
    );
}

#[test]
fn spec_fields_carried() {
    let catalog = build(&[(
        "vk_features.json",
        r#"{"features": [{
            "name": "asyncCommandQueue",
            "category": "Features",
            "description": ["Use an asynchronous", "command queue"],
            "bug": ""
        }]}"#,
    )])
    .unwrap();

    let spec = catalog.get(0).unwrap();
    assert_eq!(spec.ident, "AsyncCommandQueue");
    assert_eq!(spec.source_name, "asyncCommandQueue");
    assert_eq!(spec.category.as_deref(), Some("Features"));
    assert_eq!(spec.description, "Use an asynchronous command queue");
    assert_eq!(spec.bug, None);
    assert_eq!(spec.origin, "vk_features.json");
}

#[test]
fn merges_across_files() {
    let catalog = build(&[
        ("gl.json", r#"{"features": [{"name": "allowCompressedFormats", "category": "GL"}, {"name": "b"}]}"#),
        ("vk.json", r#"{"features": [{"name": "allowCompressedFormats", "category": "VK"}, {"name": "a"}]}"#),
    ])
    .unwrap();

    assert_eq!(names(&catalog), ["A", "AllowCompressedFormats", "B"]);
    let merged = catalog.get(1).unwrap();
    assert_eq!(merged.origin, "gl.json");
    assert_eq!(merged.category.as_deref(), Some("GL"));
}

#[test]
fn position_is_exact() {
    let catalog = build(&[("a.json", r#"{"features": [{"name": "b"}, {"name": "allowAstcFormats"}, {"name": "c"}]}"#)])
        .unwrap();

    assert_eq!(catalog.position("AllowAstcFormats"), Some(0));
    assert_eq!(catalog.position("C"), Some(2));
    assert_eq!(catalog.position("allowAstcFormats"), None);
    assert_eq!(catalog.position("D"), None);
}

#[test]
fn rejects_duplicate_in_one_file() {
    let err = build(&[("a.json", r#"{"features": [{"name": "foo"}, {"name": "foo"}]}"#)]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"a.json: feature 'foo' is declared more than once");
}

#[test]
fn rejects_case_collision() {
    let err = build(&[
        ("a.json", r#"{"features": [{"name": "allowEtcFormats"}]}"#),
        ("b.json", r#"{"features": [{"name": "allowETCFormats"}]}"#),
    ])
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"b.json: feature 'allowETCFormats' differs only in case from 'allowEtcFormats' (a.json)"
    );
}

#[test]
fn rejects_empty_name() {
    let err = build(&[("a.json", r#"{"features": [{"name": "ok"}, {"name": ""}]}"#)]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"a.json: feature #1 has an empty name");
}

#[test]
fn rejects_invalid_names() {
    for name in ["1abc", "has space", "trailing_", "a--b", "dollar$"] {
        let json = format!(r#"{{"features": [{{"name": "{name}"}}]}}"#);
        let err = build(&[("a.json", &json)]).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidName { name: ref n, .. } if n == name),
            "{name}: {err}"
        );
    }
}

#[test]
fn rejects_reserved_names() {
    for name in ["invalidEnum", "InvalidEnum", "enumCount", "self", "cOUNT", "COUNT", "aLL", "ALL"] {
        let json = format!(r#"{{"features": [{{"name": "{name}"}}]}}"#);
        let err = build(&[("a.json", &json)]).unwrap_err();
        assert!(matches!(err, CatalogError::ReservedName { .. }), "{name}: {err}");
    }
}

#[test]
fn case_variants_of_generated_items_are_allowed() {
    let catalog = build(&[("a.json", r#"{"features": [{"name": "count"}, {"name": "all"}]}"#)]).unwrap();
    assert_eq!(names(&catalog), ["All", "Count"]);
}

fn numbered_features(count: usize) -> String {
    let features: Vec<String> = (0..count).map(|i| format!(r#"{{"name": "f{i}"}}"#)).collect();
    format!(r#"{{"features": [{}]}}"#, features.join(","))
}

#[test]
fn accepts_max_features() {
    let json = numbered_features(MAX_FEATURES);
    let catalog = build(&[("a.json", &json)]).unwrap();
    assert_eq!(catalog.len(), MAX_FEATURES);
}

#[test]
fn rejects_too_many_features() {
    let json = numbered_features(MAX_FEATURES + 1);
    let err = build(&[("a.json", &json)]).unwrap_err();
    assert!(matches!(err, CatalogError::TooMany { count } if count == MAX_FEATURES + 1));
    insta::assert_snapshot!(err.to_string(), @"too many features: 65537 (maximum 65536)");
}

#[test]
fn rejects_empty_catalog() {
    let err = build(&[("a.json", r#"{"features": []}"#)]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no features declared");

    let err = Catalog::builder().build().unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test]
fn rejects_malformed_json() {
    let err = build(&[("a.json", r#"{"features": [{"nam": "x"}]}"#)]).unwrap_err();
    assert!(matches!(err, CatalogError::Json { ref origin, .. } if origin == "a.json"));

    let err = build(&[("a.json", "not json")]).unwrap_err();
    assert!(err.to_string().starts_with("invalid feature file a.json: "));
}

#[test]
fn loads_from_paths() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("gl_features.json");
    let second = dir.path().join("vk_features.json");
    std::fs::File::create(&first)
        .unwrap()
        .write_all(br#"{"features": [{"name": "beta"}]}"#)
        .unwrap();
    std::fs::File::create(&second)
        .unwrap()
        .write_all(br#"{"features": [{"name": "alpha"}]}"#)
        .unwrap();

    let catalog = Catalog::from_paths(&[&first, &second]).unwrap();
    assert_eq!(names(&catalog), ["Alpha", "Beta"]);
    assert_eq!(catalog.get(1).unwrap().origin, first.display().to_string());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing_features.json");

    let err = Catalog::from_paths(&[&missing]).unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other}"),
    }
}
