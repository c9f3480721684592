//! Data model for computing zonal statistics over many columns at once.

pub mod column;
pub mod error;
pub mod job;
pub mod method;
pub mod options;
pub mod sql_type;

pub use column::{ColumnInfo, ColumnTable};
pub use error::{DelegateError, Result, StatsError};
pub use job::{AggregationJob, JobBatch, default_output_name};
pub use method::StatsMethod;
pub use options::{DEFAULT_LAYER, GeometryType, MapSelection, SharedOptions};
pub use sql_type::is_numeric;
