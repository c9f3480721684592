//! Adapter between aggregation jobs and the `v.vect.stats` program.

pub mod command;
pub mod error;
pub mod process;

pub use command::{DEFAULT_STATS_COMMAND, build_arguments, format_command_line};
pub use error::{ExecError, Result};
pub use process::{DryRunDelegate, ProcessDelegate};
