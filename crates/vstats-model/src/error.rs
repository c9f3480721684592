//! Error types for job expansion and dispatch.

use thiserror::Error;

/// Boxed error reported by a delegated aggregation call.
pub type DelegateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving, expanding or dispatching jobs.
///
/// Everything except [`StatsError::Delegated`] is raised during pre-flight
/// validation, before any delegated call has been issued.
#[derive(Debug, Error)]
pub enum StatsError {
    // === Input Errors ===
    /// Method name outside the supported set.
    #[error("unknown statistics method '{name}'")]
    UnknownMethod { name: String },

    /// Requested source column does not exist in the points table.
    #[error("column <{column}> not found in vector map <{map}>, layer <{layer}>")]
    ColumnNotFound {
        column: String,
        map: String,
        layer: String,
    },

    /// Requested source column exists but its type is not numeric.
    #[error("column <{column}> in <{map}> is {sql_type} which is not a numeric type")]
    NonNumericColumn {
        column: String,
        map: String,
        sql_type: String,
    },

    // === Output Name Errors ===
    /// Explicit output names do not cover every (column, method) pair.
    #[error(
        "{provided} stats column names provided but {required} are needed \
         for every combination of columns and methods ({columns} * {methods} = {required})"
    )]
    NameCountMismatch {
        provided: usize,
        columns: usize,
        methods: usize,
        required: usize,
    },

    /// Explicit output names contain duplicates.
    #[error(
        "stats column names are not unique ({provided} provided but only {unique} are unique)"
    )]
    DuplicateNames { provided: usize, unique: usize },

    // === Dispatch Errors ===
    /// A delegated aggregation call failed; the remaining jobs were not run.
    #[error(
        "statistics job {index} ({method} of <{source_column}> into <{output_column}>) failed: {source}"
    )]
    Delegated {
        index: usize,
        source_column: String,
        method: String,
        output_column: String,
        #[source]
        source: DelegateError,
    },
}

impl StatsError {
    /// Number of repeated names for [`StatsError::DuplicateNames`], zero otherwise.
    pub fn duplicate_count(&self) -> usize {
        match self {
            StatsError::DuplicateNames { provided, unique } => provided - unique,
            _ => 0,
        }
    }

    /// True for errors detected before anything was dispatched.
    pub fn is_preflight(&self) -> bool {
        !matches!(self, StatsError::Delegated { .. })
    }
}

/// Result type for model and core operations.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_not_found_names_map_and_layer() {
        let err = StatsError::ColumnNotFound {
            column: "pop".to_string(),
            map: "schools".to_string(),
            layer: "1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column <pop> not found in vector map <schools>, layer <1>"
        );
    }

    #[test]
    fn non_numeric_reports_type() {
        let err = StatsError::NonNumericColumn {
            column: "name".to_string(),
            map: "schools".to_string(),
            sql_type: "TEXT".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column <name> in <schools> is TEXT which is not a numeric type"
        );
    }

    #[test]
    fn count_mismatch_reports_both_counts() {
        let err = StatsError::NameCountMismatch {
            provided: 3,
            columns: 2,
            methods: 2,
            required: 4,
        };
        let message = err.to_string();
        assert!(message.starts_with("3 stats column names provided but 4 are needed"));
        assert!(message.ends_with("(2 * 2 = 4)"));
    }

    #[test]
    fn duplicate_count_is_provided_minus_unique() {
        let err = StatsError::DuplicateNames {
            provided: 4,
            unique: 3,
        };
        assert_eq!(err.duplicate_count(), 1);
        assert!(err.is_preflight());
    }

    #[test]
    fn delegated_keeps_source() {
        let err = StatsError::Delegated {
            index: 2,
            source_column: "income".to_string(),
            method: "sum".to_string(),
            output_column: "income_sum".to_string(),
            source: "exit status 1".into(),
        };
        assert!(!err.is_preflight());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(
            err.to_string(),
            "statistics job 2 (sum of <income> into <income_sum>) failed: exit status 1"
        );
    }
}
