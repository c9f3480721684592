//! Argument lists for one `v.vect.stats` invocation.

use vstats_model::{AggregationJob, MapSelection, SharedOptions};

/// Default zonal statistics program.
pub const DEFAULT_STATS_COMMAND: &str = "v.vect.stats";

/// Builds the `key=value` arguments for one job.
///
/// The shared options come first, in a fixed order, followed by the
/// per-job overlay (method, source column, output column). Empty category
/// and WHERE filters are omitted. The primitive always runs quietly.
pub fn build_arguments(job: &AggregationJob, options: &SharedOptions) -> Vec<String> {
    let mut args = Vec::new();
    push_selection(&mut args, "points", &options.points);
    push_selection(&mut args, "areas", &options.areas);
    args.push(format!("type={}", options.feature_types_arg()));
    args.push(format!("count_column={}", options.count_column));
    args.push(format!("method={}", job.method));
    args.push(format!("points_column={}", job.source_column));
    args.push(format!("stats_column={}", job.output_column));
    args.push("--quiet".to_string());
    args
}

fn push_selection(args: &mut Vec<String>, prefix: &str, selection: &MapSelection) {
    args.push(format!("{prefix}={}", selection.map));
    args.push(format!("{prefix}_layer={}", selection.layer));
    if let Some(cats) = &selection.cats {
        args.push(format!("{prefix}_cats={cats}"));
    }
    if let Some(where_clause) = &selection.where_clause {
        args.push(format!("{prefix}_where={where_clause}"));
    }
}

/// Renders a program and its arguments as a copy-pasteable shell line.
pub fn format_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_argument)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_argument(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "=_-.,:/+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
