//! Integration test: loading catalogs from disk.

mod common;

use common::catalog_json;
use delve::catalog::{ContentCatalog, JsonCatalog};
use delve::core::{CatalogError, GameConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("game_data.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &catalog_json(120, 40));

    let config = GameConfig {
        data_path: path,
        ..GameConfig::default()
    };
    let catalog = config.load_catalog().unwrap();

    assert_eq!(catalog.hero_keys(), ["tester"]);
    assert_eq!(catalog.enemy_keys(), ["dummy"]);
    assert_eq!(catalog.data().heroes["tester"].health, 120);
    assert_eq!(catalog.data().enemies["dummy"].health, 40);
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere.json");

    let err = JsonCatalog::from_path(&path).unwrap_err();

    assert!(matches!(err, CatalogError::Io { path: ref p, .. } if *p == path));
    assert!(err.to_string().contains("nowhere.json"));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, r#"{"heroes": {"tester": {"name": "Tester"#);

    let err = JsonCatalog::from_path(&path).unwrap_err();

    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().contains("game_data.json"));
}

#[test]
fn test_file_with_invalid_stats_is_rejected() {
    let dir = TempDir::new().unwrap();
    let json = catalog_json(100, 30).replace("\"defense\": 5", "\"defense\": -3");
    let path = write_catalog(&dir, &json);

    let err = JsonCatalog::from_path(&path).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::NegativeStat { ref key, stat: "defense", value: -3 } if key == "mail"
    ));
}

#[test]
fn test_bundled_catalog_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/game_data.json");

    let catalog = JsonCatalog::from_path(path).unwrap();

    assert_eq!(catalog.hero_keys(), ["knight", "ranger", "rogue"]);
    assert_eq!(catalog.enemy_keys().len(), 4);
    assert_eq!(catalog.room_descriptions().len(), 7);
    assert!(catalog
        .data()
        .weapons
        .values()
        .all(|w| w.success_probability > 0.0 && w.success_probability <= 1.0));
}
