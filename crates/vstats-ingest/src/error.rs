//! Error types for attribute table metadata.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while listing attribute table columns.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Lookup Errors ===
    /// Vector map does not exist.
    #[error("vector map <{map}> not found")]
    MapNotFound { map: String },

    /// Vector map exists but has no attribute table on this layer.
    #[error("vector map <{map}> has no attribute table on layer <{layer}>")]
    LayerNotFound { map: String, layer: String },

    /// The ordered column listing names a column the lookup does not know.
    #[error("column <{column}> of <{map}> layer <{layer}> is listed without a type")]
    ListingMismatch {
        map: String,
        layer: String,
        column: String,
    },

    // === Catalog Errors ===
    /// Failed to read the catalog file.
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected layout.
    #[error("failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Command Errors ===
    /// Metadata command could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Metadata command exited with a failure status.
    #[error("{program} failed ({status}): {stderr}")]
    Command {
        program: String,
        status: String,
        stderr: String,
    },

    /// Column listing line is not `TYPE|name`.
    #[error("unexpected column listing line {line_number}: '{line}'")]
    ListingFormat { line_number: usize, line: String },
}

/// Result type for metadata operations.
pub type Result<T> = std::result::Result<T, IngestError>;
