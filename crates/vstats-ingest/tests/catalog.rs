//! Tests for the JSON catalog metadata source.

use std::fs;

use vstats_ingest::{Catalog, ColumnSource, IngestError};
use vstats_model::ColumnInfo;

const CATALOG: &str = r#"{
  "maps": {
    "schools": {
      "layers": {
        "1": [
          { "name": "cat", "type": "INTEGER" },
          { "name": "name", "type": "TEXT" },
          { "name": "pop", "type": "DOUBLE PRECISION" }
        ]
      }
    },
    "districts": {}
  }
}"#;

fn write_catalog(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).expect("write catalog");
    (dir, path)
}

#[test]
fn loads_columns_in_file_order() {
    let (_dir, path) = write_catalog(CATALOG);
    let catalog = Catalog::load(&path).expect("load catalog");

    let table = catalog.load_table("schools", "1").expect("load table");

    assert_eq!(table.map(), "schools");
    assert_eq!(table.layer(), "1");
    assert_eq!(table.names(), ["cat", "name", "pop"]);
    assert_eq!(
        table.get("pop"),
        Some(&ColumnInfo::new("pop", "DOUBLE PRECISION"))
    );
}

#[test]
fn separate_answers_agree_with_table() {
    let (_dir, path) = write_catalog(CATALOG);
    let catalog = Catalog::load(&path).expect("load catalog");

    let lookup = catalog.list_columns("schools", "1").unwrap();
    let order = catalog.list_column_names_in_order("schools", "1").unwrap();

    assert_eq!(lookup.len(), 3);
    assert_eq!(order, vec!["cat", "name", "pop"]);
}

#[test]
fn unknown_map_is_reported() {
    let (_dir, path) = write_catalog(CATALOG);
    let catalog = Catalog::load(&path).unwrap();

    let err = catalog.load_table("hospitals", "1").unwrap_err();

    assert!(matches!(err, IngestError::MapNotFound { ref map } if map == "hospitals"));
}

#[test]
fn map_without_layer_is_reported() {
    let (_dir, path) = write_catalog(CATALOG);
    let catalog = Catalog::load(&path).unwrap();

    let err = catalog.load_table("districts", "1").unwrap_err();

    assert!(matches!(err, IngestError::LayerNotFound { .. }));
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let (_dir, path) = write_catalog("{ \"maps\": [] }");

    let err = Catalog::load(&path).unwrap_err();

    assert!(matches!(err, IngestError::CatalogParse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = Catalog::load(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, IngestError::CatalogRead { .. }));
}

#[test]
fn builder_matches_loaded_catalog() {
    let built = Catalog::default().with_layer(
        "schools",
        "1",
        vec![ColumnInfo::new("cat", "INTEGER")],
    );

    let table = built.load_table("schools", "1").unwrap();

    assert_eq!(table.len(), 1);
}
