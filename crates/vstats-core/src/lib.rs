//! Job expansion and sequential dispatch for multi-column zonal statistics.
//!
//! The flow of one run:
//! 1. **Resolve**: pick the source columns ([`resolve_columns`])
//! 2. **Expand**: pair every column with every method and fix output names
//!    ([`expand_jobs`])
//! 3. **Dispatch**: hand each job to the statistics primitive in order
//!    ([`Dispatcher`])

pub mod dispatch;
pub mod expand;
pub mod progress;
pub mod resolve;

pub use dispatch::{AggregationDelegate, BatchReport, DispatchState, Dispatcher};
pub use expand::{expand_jobs, required_name_count, validate_output_names};
pub use progress::{NoProgress, ProgressSink, percent};
pub use resolve::resolve_columns;
