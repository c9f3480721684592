//! Delegates that run, or merely record, the statistics program.

use std::process::Command;

use tracing::{debug, info};
use vstats_core::AggregationDelegate;
use vstats_model::{AggregationJob, DelegateError, SharedOptions};

use crate::command::{DEFAULT_STATS_COMMAND, build_arguments, format_command_line};
use crate::error::ExecError;

/// Runs the statistics program as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct ProcessDelegate {
    program: String,
}

impl Default for ProcessDelegate {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_COMMAND)
    }
}

impl ProcessDelegate {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn execute(&self, args: &[String]) -> crate::error::Result<()> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if output.status.success() {
            return Ok(());
        }
        Err(ExecError::Failed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl AggregationDelegate for ProcessDelegate {
    fn run(
        &mut self,
        job: &AggregationJob,
        options: &SharedOptions,
    ) -> std::result::Result<(), DelegateError> {
        let args = build_arguments(job, options);
        debug!(command = %format_command_line(&self.program, &args), "running");
        self.execute(&args)?;
        Ok(())
    }
}

/// Records the command line of every job without running anything.
#[derive(Debug, Clone)]
pub struct DryRunDelegate {
    program: String,
    planned: Vec<String>,
}

impl Default for DryRunDelegate {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_COMMAND)
    }
}

impl DryRunDelegate {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            planned: Vec::new(),
        }
    }

    /// Command lines in dispatch order.
    pub fn planned(&self) -> &[String] {
        &self.planned
    }

    pub fn into_planned(self) -> Vec<String> {
        self.planned
    }
}

impl AggregationDelegate for DryRunDelegate {
    fn run(
        &mut self,
        job: &AggregationJob,
        options: &SharedOptions,
    ) -> std::result::Result<(), DelegateError> {
        let line = format_command_line(&self.program, &build_arguments(job, options));
        info!(index = job.index, command = %line, "dry run");
        self.planned.push(line);
        Ok(())
    }
}
