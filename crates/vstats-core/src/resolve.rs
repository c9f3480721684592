//! Resolution of the source columns to aggregate.

use tracing::debug;
use vstats_model::{ColumnTable, Result, StatsError, is_numeric};

/// Resolves the effective list of source columns.
///
/// With no requested columns, every numeric column of `table` is returned in
/// native table order. The key column (usually `cat`) is numeric and is
/// therefore included as well.
///
/// Requested columns are validated and returned in the order given:
/// each must exist in `table` and have a numeric SQL type.
///
/// # Errors
///
/// [`StatsError::ColumnNotFound`] or [`StatsError::NonNumericColumn`] for
/// the first requested column that fails validation.
pub fn resolve_columns(requested: Option<&[String]>, table: &ColumnTable) -> Result<Vec<String>> {
    let requested = requested.unwrap_or_default();
    if requested.is_empty() {
        let columns: Vec<String> = table
            .iter()
            .filter(|column| column.is_numeric())
            .map(|column| column.name.clone())
            .collect();
        debug!(
            map = table.map(),
            layer = table.layer(),
            available = table.len(),
            numeric = columns.len(),
            "using all numeric columns"
        );
        return Ok(columns);
    }

    for name in requested {
        let Some(column) = table.get(name) else {
            return Err(StatsError::ColumnNotFound {
                column: name.clone(),
                map: table.map().to_string(),
                layer: table.layer().to_string(),
            });
        };
        if !is_numeric(&column.sql_type) {
            return Err(StatsError::NonNumericColumn {
                column: name.clone(),
                map: table.map().to_string(),
                sql_type: column.sql_type.clone(),
            });
        }
    }
    Ok(requested.to_vec())
}
