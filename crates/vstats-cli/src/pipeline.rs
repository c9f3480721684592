//! Run pipeline with explicit stages.
//!
//! 1. **Metadata**: List the points map columns
//! 2. **Resolve**: Pick and validate the source columns
//! 3. **Dispatch**: Expand jobs, check output names, run them in order
//!
//! All input errors surface before the first delegated call.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use vstats_core::{AggregationDelegate, BatchReport, Dispatcher, ProgressSink, resolve_columns};
use vstats_ingest::ColumnSource;
use vstats_model::{SharedOptions, StatsMethod, sql_type};

/// Everything one run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub options: SharedOptions,
    pub methods: Vec<StatsMethod>,
    /// Explicit source columns; empty means all numeric columns.
    pub points_columns: Vec<String>,
    /// Explicit output names; empty means `{column}_{method}`.
    pub stats_columns: Vec<String>,
}

// ============================================================================
// Stage 1-2: Metadata and column resolution
// ============================================================================

/// Lists the points columns and resolves the ones to aggregate.
pub fn resolve_stage<S: ColumnSource>(source: &S, request: &RunRequest) -> Result<Vec<String>> {
    let points = &request.options.points;
    let span = info_span!("resolve", map = %points.map, layer = %points.layer);
    let _guard = span.enter();

    let table = source
        .load_table(&points.map, &points.layer)
        .with_context(|| format!("list columns of <{}>", points.map))?;
    let columns = resolve_columns(Some(request.points_columns.as_slice()), &table)?;
    info!(
        available = table.len(),
        resolved = columns.len(),
        "columns resolved"
    );
    Ok(columns)
}

// ============================================================================
// Stage 3: Dispatch
// ============================================================================

/// Runs the whole pipeline: resolve columns, then dispatch every job.
pub fn run_batch<S, D, P>(
    source: &S,
    request: &RunRequest,
    delegate: D,
    progress: P,
) -> Result<BatchReport>
where
    S: ColumnSource,
    D: AggregationDelegate,
    P: ProgressSink,
{
    let start = Instant::now();
    let columns = resolve_stage(source, request)?;

    let names = Some(request.stats_columns.as_slice());
    let mut dispatcher = Dispatcher::new(delegate, progress);
    let report = dispatcher.run(&columns, &request.methods, names, &request.options)?;
    info!(
        jobs = report.completed(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(report)
}

// ============================================================================
// Column listing
// ============================================================================

/// Numeric class of an attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Floating,
    Other,
}

impl ColumnKind {
    pub fn of(sql_type: &str) -> Self {
        if sql_type::is_integer(sql_type) {
            ColumnKind::Integer
        } else if sql_type::is_floating(sql_type) {
            ColumnKind::Floating
        } else {
            ColumnKind::Other
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnKind::Other)
    }
}

/// One row of the `columns` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub name: String,
    pub sql_type: String,
    pub kind: ColumnKind,
}

/// Columns of a map layer in native order, classified.
pub fn describe_columns<S: ColumnSource>(source: &S, map: &str, layer: &str) -> Result<Vec<ColumnRow>> {
    let table = source
        .load_table(map, layer)
        .with_context(|| format!("list columns of <{map}>"))?;
    Ok(table
        .iter()
        .map(|column| ColumnRow {
            name: column.name.clone(),
            sql_type: column.sql_type.clone(),
            kind: ColumnKind::of(&column.sql_type),
        })
        .collect())
}
