//! Aggregation jobs and ordered job batches.

use serde::{Deserialize, Serialize};

use crate::method::StatsMethod;

/// Output column name used when no explicit names are supplied.
pub fn default_output_name(source_column: &str, method: StatsMethod) -> String {
    format!("{source_column}_{method}")
}

/// One delegated call: aggregate `source_column` with `method` into
/// `output_column` on the areas table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationJob {
    /// Position in the batch, `column_index * methods + method_index`.
    pub index: usize,
    pub source_column: String,
    pub method: StatsMethod,
    pub output_column: String,
}

/// Ordered jobs of one run, indexed `0..len()`.
///
/// Column-major: all methods of a source column are contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobBatch {
    jobs: Vec<AggregationJob>,
}

impl JobBatch {
    /// Wraps jobs that are already in batch order.
    pub fn from_jobs(jobs: Vec<AggregationJob>) -> Self {
        debug_assert!(jobs.iter().enumerate().all(|(i, job)| job.index == i));
        Self { jobs }
    }

    pub fn jobs(&self) -> &[AggregationJob] {
        &self.jobs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregationJob> {
        self.jobs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&AggregationJob> {
        self.jobs.get(index)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn output_columns(&self) -> Vec<&str> {
        self.jobs
            .iter()
            .map(|job| job.output_column.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a JobBatch {
    type Item = &'a AggregationJob;
    type IntoIter = std::slice::Iter<'a, AggregationJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_joins_column_and_method() {
        assert_eq!(default_output_name("pop", StatsMethod::Average), "pop_average");
    }
}
