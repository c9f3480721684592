//! Property tests for job expansion invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::select;
use vstats_core::expand_jobs;
use vstats_model::{StatsError, StatsMethod};

fn method_strategy() -> impl Strategy<Value = StatsMethod> {
    select(StatsMethod::ALL.to_vec())
}

fn columns_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9]{0,6}", 0..5)
        .prop_map(|names| names.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn batch_size_is_columns_times_methods(
        columns in columns_strategy(),
        methods in prop::collection::vec(method_strategy(), 0..4),
    ) {
        let batch = expand_jobs(&columns, &methods, None).unwrap();
        prop_assert_eq!(batch.len(), columns.len() * methods.len());
    }

    #[test]
    fn job_index_is_column_major(
        columns in columns_strategy(),
        methods in prop::collection::vec(method_strategy(), 1..4),
    ) {
        let batch = expand_jobs(&columns, &methods, None).unwrap();
        for (position, job) in batch.iter().enumerate() {
            prop_assert_eq!(job.index, position);
            prop_assert_eq!(&job.source_column, &columns[position / methods.len()]);
            prop_assert_eq!(job.method, methods[position % methods.len()]);
        }
    }

    #[test]
    fn distinct_inputs_give_distinct_default_names(
        columns in columns_strategy(),
        methods in prop::collection::hash_set(method_strategy(), 0..4),
    ) {
        let methods: Vec<StatsMethod> = methods.into_iter().collect();
        let batch = expand_jobs(&columns, &methods, None).unwrap();
        let names: HashSet<&str> = batch.output_columns().into_iter().collect();
        // Column names have no underscore, so `{column}_{method}` cannot collide.
        prop_assert_eq!(names.len(), batch.len());
    }

    #[test]
    fn supplied_names_follow_batch_order(
        columns in columns_strategy(),
        methods in prop::collection::vec(method_strategy(), 1..4),
    ) {
        let required = columns.len() * methods.len();
        let names: Vec<String> = (0..required).map(|i| format!("out{i}")).collect();
        let batch = expand_jobs(&columns, &methods, Some(names.as_slice())).unwrap();
        prop_assert_eq!(batch.output_columns(), names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn any_other_name_count_is_rejected(
        columns in columns_strategy(),
        methods in prop::collection::vec(method_strategy(), 1..4),
        extra in 1usize..3,
        shorter in any::<bool>(),
    ) {
        let required = columns.len() * methods.len();
        prop_assume!(!(shorter && required < extra));
        let count = if shorter { required - extra } else { required + extra };
        prop_assume!(count > 0);
        let names: Vec<String> = (0..count).map(|i| format!("out{i}")).collect();
        let err = expand_jobs(&columns, &methods, Some(names.as_slice())).unwrap_err();
        let is_mismatch = matches!(
            err,
            StatsError::NameCountMismatch { provided, required: needed, .. }
                if provided == count && needed == required
        );
        prop_assert!(is_mismatch);
    }
}
