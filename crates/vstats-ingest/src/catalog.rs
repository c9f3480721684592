//! Column metadata read from a JSON catalog file.
//!
//! Useful when the attribute tables are not reachable through `v.info`
//! (planning a batch offline, tests). Layout:
//!
//! ```json
//! {
//!   "maps": {
//!     "schools": {
//!       "layers": {
//!         "1": [
//!           { "name": "cat", "type": "INTEGER" },
//!           { "name": "pop", "type": "DOUBLE PRECISION" }
//!         ]
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vstats_model::{ColumnInfo, ColumnTable};

use crate::error::{IngestError, Result};
use crate::source::{ColumnSource, index_columns};

/// Attribute columns of one vector map, per layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMap {
    #[serde(default)]
    pub layers: BTreeMap<String, Vec<ColumnInfo>>,
}

/// In-memory catalog of vector maps and their attribute columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub maps: BTreeMap<String, CatalogMap>,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Catalog =
            serde_json::from_str(&text).map_err(|source| IngestError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), maps = catalog.maps.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Adds or replaces the columns of one layer.
    #[must_use]
    pub fn with_layer(
        mut self,
        map: impl Into<String>,
        layer: impl Into<String>,
        columns: Vec<ColumnInfo>,
    ) -> Self {
        self.maps
            .entry(map.into())
            .or_default()
            .layers
            .insert(layer.into(), columns);
        self
    }

    fn columns(&self, map: &str, layer: &str) -> Result<&[ColumnInfo]> {
        let entry = self.maps.get(map).ok_or_else(|| IngestError::MapNotFound {
            map: map.to_string(),
        })?;
        entry
            .layers
            .get(layer)
            .map(Vec::as_slice)
            .ok_or_else(|| IngestError::LayerNotFound {
                map: map.to_string(),
                layer: layer.to_string(),
            })
    }
}

impl ColumnSource for Catalog {
    fn list_columns(&self, map: &str, layer: &str) -> Result<HashMap<String, ColumnInfo>> {
        Ok(index_columns(self.columns(map, layer)?))
    }

    fn list_column_names_in_order(&self, map: &str, layer: &str) -> Result<Vec<String>> {
        Ok(self
            .columns(map, layer)?
            .iter()
            .map(|column| column.name.clone())
            .collect())
    }

    fn load_table(&self, map: &str, layer: &str) -> Result<ColumnTable> {
        Ok(ColumnTable::from_ordered(
            map,
            layer,
            self.columns(map, layer)?.iter().cloned(),
        ))
    }
}
