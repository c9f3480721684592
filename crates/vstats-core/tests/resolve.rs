//! Tests for source column resolution.

use std::collections::HashMap;

use vstats_core::resolve_columns;
use vstats_model::{ColumnInfo, ColumnTable, StatsError};

fn points_table() -> ColumnTable {
    ColumnTable::from_ordered(
        "schools",
        "1",
        vec![
            ColumnInfo::new("cat", "INTEGER"),
            ColumnInfo::new("name", "TEXT"),
            ColumnInfo::new("pop", "DOUBLE PRECISION"),
            ColumnInfo::new("built", "DATE"),
            ColumnInfo::new("income", "real"),
            ColumnInfo::new("rooms", "SMALLINT"),
        ],
    )
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn defaults_to_numeric_columns_in_native_order() {
    let columns = resolve_columns(None, &points_table()).unwrap();
    assert_eq!(columns, strings(&["cat", "pop", "income", "rooms"]));
}

#[test]
fn empty_request_behaves_like_no_request() {
    let requested: Vec<String> = Vec::new();
    let columns = resolve_columns(Some(requested.as_slice()), &points_table()).unwrap();
    assert_eq!(columns, strings(&["cat", "pop", "income", "rooms"]));
}

#[test]
fn default_order_follows_order_list_not_lookup() {
    let mut lookup = HashMap::new();
    for (name, sql_type) in [("z", "INT"), ("a", "INT"), ("m", "REAL")] {
        lookup.insert(name.to_string(), ColumnInfo::new(name, sql_type));
    }
    let table = ColumnTable::new("points", "2", lookup, strings(&["m", "z", "a"]));

    let columns = resolve_columns(None, &table).unwrap();
    assert_eq!(columns, strings(&["m", "z", "a"]));
}

#[test]
fn table_without_numeric_columns_resolves_to_nothing() {
    let table = ColumnTable::from_ordered("labels", "1", vec![ColumnInfo::new("label", "TEXT")]);
    assert!(resolve_columns(None, &table).unwrap().is_empty());
}

#[test]
fn requested_columns_keep_requested_order() {
    let requested = strings(&["rooms", "pop"]);
    let columns = resolve_columns(Some(requested.as_slice()), &points_table()).unwrap();
    assert_eq!(columns, requested);
}

#[test]
fn missing_column_names_map_and_layer() {
    let requested = strings(&["pop", "density"]);
    let err = resolve_columns(Some(requested.as_slice()), &points_table()).unwrap_err();
    match err {
        StatsError::ColumnNotFound { column, map, layer } => {
            assert_eq!(column, "density");
            assert_eq!(map, "schools");
            assert_eq!(layer, "1");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_numeric_column_reports_actual_type() {
    let requested = strings(&["name"]);
    let err = resolve_columns(Some(requested.as_slice()), &points_table()).unwrap_err();
    match err {
        StatsError::NonNumericColumn {
            column, sql_type, ..
        } => {
            assert_eq!(column, "name");
            assert_eq!(sql_type, "TEXT");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn column_lookup_is_case_sensitive() {
    let requested = strings(&["POP"]);
    let err = resolve_columns(Some(requested.as_slice()), &points_table()).unwrap_err();
    assert!(matches!(err, StatsError::ColumnNotFound { .. }));
}
