//! Error types for running the statistics primitive.

use thiserror::Error;

/// Errors raised by one delegated `v.vect.stats` call.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program exited with a failure status.
    #[error("{program} failed ({status}){}", format_stderr(.stderr))]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Result type for delegated calls.
pub type Result<T> = std::result::Result<T, ExecError>;
