//! Column metadata read from `v.info -c`.
//!
//! `v.info -c` prints one `TYPE|name` line per attribute column, in the
//! table's native order.

use std::collections::HashMap;
use std::process::Command;

use tracing::debug;
use vstats_model::{ColumnInfo, ColumnTable};

use crate::error::{IngestError, Result};
use crate::source::{ColumnSource, index_columns};

/// Default program used to list columns.
pub const DEFAULT_INFO_COMMAND: &str = "v.info";

/// Parses `TYPE|name` lines into columns, keeping their order.
///
/// Blank lines are ignored.
pub fn parse_column_listing(output: &str) -> Result<Vec<ColumnInfo>> {
    let mut columns = Vec::new();
    for (index, line) in output.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some((sql_type, name)) = line.split_once('|') else {
            return Err(IngestError::ListingFormat {
                line_number: index + 1,
                line: line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() || name.contains('|') {
            return Err(IngestError::ListingFormat {
                line_number: index + 1,
                line: line.to_string(),
            });
        }
        columns.push(ColumnInfo::new(name, sql_type.trim()));
    }
    Ok(columns)
}

/// Lists columns by running `v.info -c map=<map> layer=<layer> --quiet`.
#[derive(Debug, Clone)]
pub struct VInfoColumnSource {
    program: String,
}

impl Default for VInfoColumnSource {
    fn default() -> Self {
        Self::new(DEFAULT_INFO_COMMAND)
    }
}

impl VInfoColumnSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn read_columns(&self, map: &str, layer: &str) -> Result<Vec<ColumnInfo>> {
        debug!(program = %self.program, map, layer, "listing columns");
        let output = Command::new(&self.program)
            .arg("-c")
            .arg(format!("map={map}"))
            .arg(format!("layer={layer}"))
            .arg("--quiet")
            .output()
            .map_err(|source| IngestError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(
                &self.program,
                map,
                layer,
                output.status.to_string(),
                stderr,
            ));
        }
        parse_column_listing(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Maps a failed listing to a lookup error when the message says so.
fn classify_failure(
    program: &str,
    map: &str,
    layer: &str,
    status: String,
    stderr: String,
) -> IngestError {
    let lowered = stderr.to_ascii_lowercase();
    if lowered.contains("not found") && lowered.contains(&format!("<{}>", map.to_ascii_lowercase()))
    {
        IngestError::MapNotFound {
            map: map.to_string(),
        }
    } else if lowered.contains("database connection") {
        IngestError::LayerNotFound {
            map: map.to_string(),
            layer: layer.to_string(),
        }
    } else {
        IngestError::Command {
            program: program.to_string(),
            status,
            stderr,
        }
    }
}

impl ColumnSource for VInfoColumnSource {
    fn list_columns(&self, map: &str, layer: &str) -> Result<HashMap<String, ColumnInfo>> {
        Ok(index_columns(&self.read_columns(map, layer)?))
    }

    fn list_column_names_in_order(&self, map: &str, layer: &str) -> Result<Vec<String>> {
        Ok(self
            .read_columns(map, layer)?
            .into_iter()
            .map(|column| column.name)
            .collect())
    }

    fn load_table(&self, map: &str, layer: &str) -> Result<ColumnTable> {
        Ok(ColumnTable::from_ordered(
            map,
            layer,
            self.read_columns(map, layer)?,
        ))
    }
}
