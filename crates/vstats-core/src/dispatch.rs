//! Sequential dispatch of a job batch to the zonal statistics primitive.
//!
//! Every delegated call creates or updates a column on the areas table, so
//! jobs run strictly one at a time. The first failure stops the batch;
//! columns written by earlier jobs stay in place.
//!
//! # States
//!
//! ```text
//! Validating -> Dispatching(0) -> ... -> Dispatching(n-1) -> Succeeded
//!      |              |                          |
//!      +-> Failed     +-> Failed { index: 0 }    +-> Failed { index: n-1 }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, info_span, warn};
use vstats_model::{
    AggregationJob, DelegateError, JobBatch, Result, SharedOptions, StatsError, StatsMethod,
};

use crate::expand::expand_jobs;
use crate::progress::ProgressSink;

/// The external zonal statistics primitive, invoked once per job.
///
/// A call either runs to completion and has written `job.output_column`, or
/// fails; the dispatcher never retries.
pub trait AggregationDelegate {
    fn run(
        &mut self,
        job: &AggregationJob,
        options: &SharedOptions,
    ) -> std::result::Result<(), DelegateError>;
}

impl<T: AggregationDelegate + ?Sized> AggregationDelegate for &mut T {
    fn run(
        &mut self,
        job: &AggregationJob,
        options: &SharedOptions,
    ) -> std::result::Result<(), DelegateError> {
        (**self).run(job, options)
    }
}

/// Where a dispatcher is in its current (or last) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Resolving and checking output names; nothing dispatched yet.
    Validating,
    /// Job with this index is in flight.
    Dispatching(usize),
    /// All jobs completed.
    Succeeded,
    /// Stopped. `index` is the failing job, or `None` if validation failed.
    Failed { index: Option<usize> },
}

impl DispatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchState::Succeeded | DispatchState::Failed { .. })
    }
}

/// Outcome of a fully successful batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub jobs: Vec<AggregationJob>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn completed(&self) -> usize {
        self.jobs.len()
    }

    pub fn output_columns(&self) -> Vec<&str> {
        self.jobs
            .iter()
            .map(|job| job.output_column.as_str())
            .collect()
    }
}

/// Runs job batches against a delegate, one job at a time.
#[derive(Debug)]
pub struct Dispatcher<D, P> {
    delegate: D,
    progress: P,
    state: DispatchState,
}

impl<D, P> Dispatcher<D, P>
where
    D: AggregationDelegate,
    P: ProgressSink,
{
    pub fn new(delegate: D, progress: P) -> Self {
        Self {
            delegate,
            progress,
            state: DispatchState::Validating,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn into_parts(self) -> (D, P) {
        (self.delegate, self.progress)
    }

    /// Validates and expands the inputs, then dispatches every job.
    ///
    /// # Errors
    ///
    /// Validation errors from [`expand_jobs`] before any call is made, or
    /// [`StatsError::Delegated`] for the first failing job.
    pub fn run(
        &mut self,
        columns: &[String],
        methods: &[StatsMethod],
        names: Option<&[String]>,
        options: &SharedOptions,
    ) -> Result<BatchReport> {
        self.state = DispatchState::Validating;
        let batch = match expand_jobs(columns, methods, names) {
            Ok(batch) => batch,
            Err(error) => {
                self.state = DispatchState::Failed { index: None };
                return Err(error);
            }
        };
        self.run_batch(&batch, options)
    }

    /// Dispatches an already expanded batch.
    ///
    /// # Errors
    ///
    /// [`StatsError::Delegated`] for the first failing job; later jobs are
    /// not dispatched.
    pub fn run_batch(&mut self, batch: &JobBatch, options: &SharedOptions) -> Result<BatchReport> {
        let span = info_span!(
            "batch",
            points = %options.points.map,
            areas = %options.areas.map,
            jobs = batch.len()
        );
        let _guard = span.enter();
        let start = Instant::now();
        let total = batch.len();
        if total == 0 {
            warn!("no columns to compute statistics for");
        }

        for job in batch {
            self.state = DispatchState::Dispatching(job.index);
            let job_span = info_span!(
                "job",
                index = job.index,
                column = %job.source_column,
                method = %job.method,
                output = %job.output_column
            );
            let _job_guard = job_span.enter();
            debug!("dispatching");
            if let Err(source) = self.delegate.run(job, options) {
                self.state = DispatchState::Failed {
                    index: Some(job.index),
                };
                return Err(StatsError::Delegated {
                    index: job.index,
                    source_column: job.source_column.clone(),
                    method: job.method.to_string(),
                    output_column: job.output_column.clone(),
                    source,
                });
            }
            self.progress.advance(job.index + 1, total);
        }
        self.progress.finish();
        self.state = DispatchState::Succeeded;

        let elapsed = start.elapsed();
        info!(
            jobs = total,
            duration_ms = elapsed.as_millis(),
            "statistics batch complete"
        );
        Ok(BatchReport {
            jobs: batch.jobs().to_vec(),
            elapsed,
        })
    }
}
