//! Attribute table metadata for the points map.

pub mod catalog;
pub mod error;
pub mod source;
pub mod vinfo;

pub use catalog::{Catalog, CatalogMap};
pub use error::{IngestError, Result};
pub use source::ColumnSource;
pub use vinfo::{DEFAULT_INFO_COMMAND, VInfoColumnSource, parse_column_listing};
