//! Expansion of (column, method) pairs into an ordered job batch.

use std::collections::HashSet;

use vstats_model::{
    AggregationJob, JobBatch, Result, StatsError, StatsMethod, default_output_name,
};

/// Number of jobs, and therefore output names, for the given inputs.
pub fn required_name_count(columns: &[String], methods: &[StatsMethod]) -> usize {
    columns.len() * methods.len()
}

/// Checks explicit output names against the number of jobs and for duplicates.
///
/// # Errors
///
/// [`StatsError::NameCountMismatch`] when the count differs from
/// `columns * methods`, then [`StatsError::DuplicateNames`] when a name repeats.
pub fn validate_output_names(
    names: &[String],
    columns: &[String],
    methods: &[StatsMethod],
) -> Result<()> {
    let required = required_name_count(columns, methods);
    if names.len() != required {
        return Err(StatsError::NameCountMismatch {
            provided: names.len(),
            columns: columns.len(),
            methods: methods.len(),
            required,
        });
    }
    let unique = names.iter().collect::<HashSet<_>>().len();
    if unique != names.len() {
        return Err(StatsError::DuplicateNames {
            provided: names.len(),
            unique,
        });
    }
    Ok(())
}

/// Builds the job batch for every (column, method) pair.
///
/// Jobs are column-major: job `i` pairs `columns[i / methods.len()]` with
/// `methods[i % methods.len()]`. Explicit `names` are assigned by position in
/// that same order; otherwise each job writes to `{column}_{method}`.
/// Default names are not checked for uniqueness.
///
/// # Errors
///
/// See [`validate_output_names`].
pub fn expand_jobs(
    columns: &[String],
    methods: &[StatsMethod],
    names: Option<&[String]>,
) -> Result<JobBatch> {
    let names = names.filter(|names| !names.is_empty());
    if let Some(names) = names {
        validate_output_names(names, columns, methods)?;
    }

    let pairs = columns
        .iter()
        .flat_map(|column| methods.iter().map(move |method| (column, *method)));
    let jobs = pairs
        .enumerate()
        .map(|(index, (column, method))| AggregationJob {
            index,
            source_column: column.clone(),
            method,
            output_column: match names {
                Some(names) => names[index].clone(),
                None => default_output_name(column, method),
            },
        })
        .collect();
    Ok(JobBatch::from_jobs(jobs))
}
