use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vstats_cli::pipeline::{RunRequest, describe_columns, run_batch};
use vstats_cli::progress::{BarProgress, PlainProgress};
use vstats_core::{BatchReport, NoProgress, ProgressSink};
use vstats_exec::{DryRunDelegate, ProcessDelegate};
use vstats_ingest::{Catalog, ColumnSource, VInfoColumnSource};
use vstats_model::{GeometryType, MapSelection, SharedOptions};

use crate::cli::{ColumnsArgs, MetadataArgs, ProgressArg, RunArgs};
use crate::summary::print_columns;

/// Result of the `run` command.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: BatchReport,
    /// Command lines that would have run, for `--dry-run`.
    pub planned: Option<Vec<String>>,
}

pub fn run_stats(args: &RunArgs) -> Result<RunOutcome> {
    let request = build_request(args);
    let span = info_span!(
        "run",
        points = %request.options.points.map,
        areas = %request.options.areas.map,
        dry_run = args.dry_run
    );
    let _guard = span.enter();

    let source = column_source(&args.metadata)?;

    if args.dry_run {
        let mut delegate = DryRunDelegate::new(&args.stats_command);
        let report = run_batch(&source, &request, &mut delegate, NoProgress)?;
        info!(jobs = report.completed(), "dry run complete");
        return Ok(RunOutcome {
            report,
            planned: Some(delegate.into_planned()),
        });
    }

    let delegate = ProcessDelegate::new(&args.stats_command);
    let progress = progress_sink(args.progress);
    let report = run_batch(&source, &request, delegate, progress)?;
    Ok(RunOutcome {
        report,
        planned: None,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let source = column_source(&args.metadata)?;
    let rows = describe_columns(&source, &args.map, &args.layer)?;
    print_columns(&args.map, &args.layer, &rows);
    Ok(())
}

/// Converts parsed arguments into the immutable run configuration.
fn build_request(args: &RunArgs) -> RunRequest {
    let points = MapSelection::new(&args.points)
        .with_layer(&args.points_layer)
        .with_cats(args.points_cats.clone())
        .with_where(args.points_where.clone());
    let areas = MapSelection::new(&args.areas)
        .with_layer(&args.areas_layer)
        .with_cats(args.areas_cats.clone())
        .with_where(args.areas_where.clone());
    let feature_types = args
        .feature_types
        .iter()
        .copied()
        .map(GeometryType::from)
        .collect();
    let options = SharedOptions::new(points, areas, &args.count_column)
        .with_feature_types(feature_types);
    RunRequest {
        options,
        methods: args.methods.clone(),
        points_columns: list_option(&args.points_columns),
        stats_columns: list_option(&args.stats_columns),
    }
}

/// Items of a comma-separated option, kept verbatim; an empty option
/// (`--stats-columns ""`) counts as not given.
fn list_option(values: &[String]) -> Vec<String> {
    match values {
        [only] if only.is_empty() => Vec::new(),
        _ => values.to_vec(),
    }
}

fn column_source(args: &MetadataArgs) -> Result<Box<dyn ColumnSource>> {
    match &args.catalog {
        Some(path) => {
            let catalog = Catalog::load(path).context("load catalog")?;
            Ok(Box::new(catalog))
        }
        None => Ok(Box::new(VInfoColumnSource::new(&args.info_command))),
    }
}

fn progress_sink(mode: ProgressArg) -> Box<dyn ProgressSink> {
    match effective_progress(mode, io::stderr().is_terminal()) {
        ProgressArg::Bar => Box::new(BarProgress::new("statistics")),
        ProgressArg::Plain => Box::new(PlainProgress::stderr()),
        ProgressArg::Off => Box::new(NoProgress),
    }
}

/// A bar is never drawn off a terminal, so fall back to percentage lines.
fn effective_progress(mode: ProgressArg, stderr_is_terminal: bool) -> ProgressArg {
    match mode {
        ProgressArg::Bar if !stderr_is_terminal => ProgressArg::Plain,
        other => other,
    }
}
