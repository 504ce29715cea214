//! Loading static catalog directories.

use super::common::{make_listing, write_catalog_dir};
use std::fs;
use tempfile::TempDir;
use toolshelf::{load_manifest_dir, CatalogError, Category};

#[test]
fn test_load_minimal_directory() {
    let dir = TempDir::new().unwrap();
    write_catalog_dir(
        dir.path(),
        &[
            make_listing("Aider", Category::Agent),
            make_listing("Qdrant", Category::Infra),
        ],
    );

    let catalog = load_manifest_dir(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("aider"));
    assert!(catalog.categories().is_empty());
}

#[test]
fn test_listing_files_concatenate_in_manifest_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 1, "listings": ["b.json", "a.json"] }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("a.json"),
        serde_json::to_string(&[make_listing("Aider", Category::Agent)]).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join("b.json"),
        serde_json::to_string(&[make_listing("Bolt", Category::Agent)]).unwrap(),
    )
    .unwrap();

    let catalog = load_manifest_dir(dir.path()).unwrap();
    let slugs: Vec<&str> = catalog.listings().iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["bolt", "aider"]);
}

#[test]
fn test_minimal_wire_shape_gets_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 1, "listings": ["listings.json"] }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("listings.json"),
        r#"[{
            "slug": "cline",
            "name": "Cline",
            "shortDescription": "Coding agent in your editor",
            "description": "Autonomous coding agent",
            "category": "agent"
        }]"#,
    )
    .unwrap();

    let catalog = load_manifest_dir(dir.path()).unwrap();
    let cline = catalog.listing("cline").unwrap();
    assert!(cline.use_cases.is_empty());
    assert!(!cline.featured);
    assert_eq!(cline.sponsored_tier, toolshelf::SponsorTier::None);
}

#[test]
fn test_duplicate_slug_across_files() {
    let dir = TempDir::new().unwrap();
    write_catalog_dir(
        dir.path(),
        &[
            make_listing("Aider", Category::Agent),
            make_listing("Aider", Category::Agent),
        ],
    );
    assert!(matches!(
        load_manifest_dir(dir.path()),
        Err(CatalogError::DuplicateSlug(slug)) if slug == "aider"
    ));
}

#[test]
fn test_unsupported_version() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 7, "listings": [] }"#,
    )
    .unwrap();
    assert!(matches!(
        load_manifest_dir(dir.path()),
        Err(CatalogError::UnsupportedVersion(7))
    ));
}

#[test]
fn test_missing_listing_file_names_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 1, "listings": ["gone.json"] }"#,
    )
    .unwrap();
    match load_manifest_dir(dir.path()) {
        Err(CatalogError::Io { path, .. }) => assert!(path.ends_with("gone.json")),
        other => panic!("expected Io error, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_invalid_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.json"), "{ not json").unwrap();
    assert!(matches!(
        load_manifest_dir(dir.path()),
        Err(CatalogError::Json { .. })
    ));
}

#[test]
fn test_unknown_category_value_is_json_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "version": 1, "listings": ["listings.json"] }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("listings.json"),
        r#"[{ "slug": "x", "name": "X", "shortDescription": "", "description": "", "category": "database" }]"#,
    )
    .unwrap();
    assert!(matches!(
        load_manifest_dir(dir.path()),
        Err(CatalogError::Json { .. })
    ));
}
