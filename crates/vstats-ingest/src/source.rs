//! Metadata source seam.

use std::collections::HashMap;

use vstats_model::{ColumnInfo, ColumnTable};

use crate::error::{IngestError, Result};

/// Lists the attribute columns of a vector map layer.
pub trait ColumnSource {
    /// Columns by name.
    fn list_columns(&self, map: &str, layer: &str) -> Result<HashMap<String, ColumnInfo>>;

    /// Column names in the table's native order.
    fn list_column_names_in_order(&self, map: &str, layer: &str) -> Result<Vec<String>>;

    /// Both answers bundled as a [`ColumnTable`].
    ///
    /// Fails with [`IngestError::ListingMismatch`] when the ordered names
    /// include a column missing from the lookup.
    fn load_table(&self, map: &str, layer: &str) -> Result<ColumnTable> {
        let columns = self.list_columns(map, layer)?;
        let order = self.list_column_names_in_order(map, layer)?;
        if let Some(missing) = order.iter().find(|name| !columns.contains_key(*name)) {
            return Err(IngestError::ListingMismatch {
                map: map.to_string(),
                layer: layer.to_string(),
                column: missing.clone(),
            });
        }
        Ok(ColumnTable::new(map, layer, columns, order))
    }
}

impl<T: ColumnSource + ?Sized> ColumnSource for &T {
    fn list_columns(&self, map: &str, layer: &str) -> Result<HashMap<String, ColumnInfo>> {
        (**self).list_columns(map, layer)
    }

    fn list_column_names_in_order(&self, map: &str, layer: &str) -> Result<Vec<String>> {
        (**self).list_column_names_in_order(map, layer)
    }

    fn load_table(&self, map: &str, layer: &str) -> Result<ColumnTable> {
        (**self).load_table(map, layer)
    }
}

impl<T: ColumnSource + ?Sized> ColumnSource for Box<T> {
    fn list_columns(&self, map: &str, layer: &str) -> Result<HashMap<String, ColumnInfo>> {
        (**self).list_columns(map, layer)
    }

    fn list_column_names_in_order(&self, map: &str, layer: &str) -> Result<Vec<String>> {
        (**self).list_column_names_in_order(map, layer)
    }

    fn load_table(&self, map: &str, layer: &str) -> Result<ColumnTable> {
        (**self).load_table(map, layer)
    }
}

/// Indexes columns listed in native order by name.
pub(crate) fn index_columns(columns: &[ColumnInfo]) -> HashMap<String, ColumnInfo> {
    columns
        .iter()
        .map(|column| (column.name.clone(), column.clone()))
        .collect()
}
