//! CLI library components for multi-column zonal statistics.

pub mod logging;
pub mod pipeline;
pub mod progress;
