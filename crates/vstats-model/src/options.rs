//! Options shared by every delegated statistics call in a batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default layer number for both input maps.
pub const DEFAULT_LAYER: &str = "1";

/// Feature type of the points map taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    #[default]
    Point,
    Centroid,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::Centroid => "centroid",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" => Ok(GeometryType::Point),
            "centroid" => Ok(GeometryType::Centroid),
            other => Err(format!("unknown feature type: {other}")),
        }
    }
}

/// Feature selection on one input map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSelection {
    pub map: String,
    pub layer: String,
    /// Category values, in the primitive's own range syntax (e.g. `1-10,15`).
    pub cats: Option<String>,
    /// WHERE condition without the `where` keyword.
    pub where_clause: Option<String>,
}

impl MapSelection {
    pub fn new(map: impl Into<String>) -> Self {
        Self {
            map: map.into(),
            layer: DEFAULT_LAYER.to_string(),
            cats: None,
            where_clause: None,
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    #[must_use]
    pub fn with_cats(mut self, cats: Option<String>) -> Self {
        self.cats = cats.filter(|value| !value.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_where(mut self, where_clause: Option<String>) -> Self {
        self.where_clause = where_clause.filter(|value| !value.trim().is_empty());
        self
    }
}

/// Fixed options passed through unchanged to every delegated call.
///
/// Built once per run and never mutated; the per-job fields (method, source
/// column, output column) travel separately in each
/// [`AggregationJob`](crate::AggregationJob).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedOptions {
    pub points: MapSelection,
    pub areas: MapSelection,
    pub feature_types: Vec<GeometryType>,
    /// Column receiving the number of points per area. Mandatory for the
    /// primitive, so it is rewritten by every job.
    pub count_column: String,
}

impl SharedOptions {
    pub fn new(points: MapSelection, areas: MapSelection, count_column: impl Into<String>) -> Self {
        Self {
            points,
            areas,
            feature_types: vec![GeometryType::default()],
            count_column: count_column.into(),
        }
    }

    /// Sets the feature types; an empty list falls back to points only.
    #[must_use]
    pub fn with_feature_types(mut self, types: Vec<GeometryType>) -> Self {
        self.feature_types = if types.is_empty() {
            vec![GeometryType::default()]
        } else {
            types
        };
        self
    }

    /// Feature types joined with commas, e.g. `point,centroid`.
    pub fn feature_types_arg(&self) -> String {
        self.feature_types
            .iter()
            .map(GeometryType::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
