//! Attribute table column metadata.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::sql_type;

/// One attribute column as reported by the table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared SQL type name, as reported (not normalized).
    #[serde(rename = "type")]
    pub sql_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        sql_type::is_numeric(&self.sql_type)
    }
}

/// Columns of one layer of a vector map.
///
/// Holds both the name lookup and the native column order of the table;
/// the lookup's iteration order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct ColumnTable {
    map: String,
    layer: String,
    columns: HashMap<String, ColumnInfo>,
    order: Vec<String>,
}

impl ColumnTable {
    /// Builds a table from the two metadata answers: the name lookup and the
    /// native order of column names. Every ordered name must be in the lookup.
    pub fn new(
        map: impl Into<String>,
        layer: impl Into<String>,
        columns: HashMap<String, ColumnInfo>,
        order: Vec<String>,
    ) -> Self {
        debug_assert!(
            order.iter().all(|name| columns.contains_key(name)),
            "ordered column names missing from the lookup"
        );
        Self {
            map: map.into(),
            layer: layer.into(),
            columns,
            order,
        }
    }

    /// Builds a table from columns listed in native order.
    pub fn from_ordered(
        map: impl Into<String>,
        layer: impl Into<String>,
        columns: impl IntoIterator<Item = ColumnInfo>,
    ) -> Self {
        let mut lookup = HashMap::new();
        let mut order = Vec::new();
        for column in columns {
            order.push(column.name.clone());
            lookup.insert(column.name.clone(), column);
        }
        Self::new(map, layer, lookup, order)
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn get(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }

    /// Column names in native table order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Columns in native table order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnInfo> {
        self.order.iter().filter_map(|name| self.columns.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ordered_keeps_native_order() {
        let table = ColumnTable::from_ordered(
            "points",
            "1",
            vec![
                ColumnInfo::new("cat", "INTEGER"),
                ColumnInfo::new("name", "TEXT"),
                ColumnInfo::new("pop", "DOUBLE PRECISION"),
            ],
        );
        assert_eq!(table.names(), ["cat", "name", "pop"]);
        assert_eq!(table.get("name").map(|c| c.sql_type.as_str()), Some("TEXT"));
        assert!(table.get("pop").is_some_and(ColumnInfo::is_numeric));
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn column_info_uses_type_key() {
        let column: ColumnInfo =
            serde_json::from_str(r#"{"name":"pop","type":"REAL"}"#).unwrap();
        assert_eq!(column, ColumnInfo::new("pop", "REAL"));
    }
}
