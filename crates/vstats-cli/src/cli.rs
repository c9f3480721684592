//! CLI argument definitions for multi-column zonal statistics.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vstats_exec::DEFAULT_STATS_COMMAND;
use vstats_ingest::DEFAULT_INFO_COMMAND;
use vstats_model::{DEFAULT_LAYER, GeometryType, StatsMethod};

#[derive(Parser)]
#[command(
    name = "v-vect-stats-multi",
    version,
    about = "Compute zonal statistics for multiple point attribute columns",
    long_about = "Aggregate point attributes into the areas that contain them.\n\n\
                  Runs v.vect.stats once for every combination of source column and \
                  method, writing one statistics column per combination to the areas map."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute statistics for every column and method combination.
    Run(RunArgs),

    /// List the columns of a vector map and whether they can be aggregated.
    Columns(ColumnsArgs),

    /// List the supported statistics methods.
    Methods,
}

/// Where column metadata comes from.
#[derive(Args, Clone)]
pub struct MetadataArgs {
    /// Read column metadata from a JSON catalog instead of v.info.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Program used to list attribute columns.
    #[arg(long = "info-command", value_name = "PROGRAM", default_value = DEFAULT_INFO_COMMAND)]
    pub info_command: String,
}

#[derive(Args)]
pub struct RunArgs {
    /// Vector map with points and one or more attributes.
    #[arg(long = "points", value_name = "NAME")]
    pub points: String,

    /// Vector map with areas receiving the statistics.
    #[arg(long = "areas", value_name = "NAME")]
    pub areas: String,

    /// Feature types of the points map to use.
    #[arg(
        long = "type",
        value_enum,
        value_delimiter = ',',
        default_value = "point",
        help_heading = "Selection"
    )]
    pub feature_types: Vec<FeatureTypeArg>,

    /// Layer number for the points map.
    #[arg(long = "points-layer", default_value = DEFAULT_LAYER, help_heading = "Selection")]
    pub points_layer: String,

    /// Category values for the points map (e.g. 1,3,7-9).
    #[arg(long = "points-cats", help_heading = "Selection")]
    pub points_cats: Option<String>,

    /// WHERE conditions for the points map, without the 'where' keyword.
    #[arg(long = "points-where", help_heading = "Selection")]
    pub points_where: Option<String>,

    /// Layer number for the areas map.
    #[arg(long = "areas-layer", default_value = DEFAULT_LAYER, help_heading = "Selection")]
    pub areas_layer: String,

    /// Category values for the areas map.
    #[arg(long = "areas-cats", help_heading = "Selection")]
    pub areas_cats: Option<String>,

    /// WHERE conditions for the areas map, without the 'where' keyword.
    #[arg(long = "areas-where", help_heading = "Selection")]
    pub areas_where: Option<String>,

    /// Statistics methods: sum, average, median, mode, minimum, maximum,
    /// range, stddev, variance, diversity.
    #[arg(
        long = "method",
        required = true,
        value_delimiter = ',',
        value_parser = parse_method
    )]
    pub methods: Vec<StatsMethod>,

    /// Points columns to compute statistics from (default: all numeric columns).
    #[arg(long = "points-columns", value_delimiter = ',', value_name = "COLUMNS")]
    pub points_columns: Vec<String>,

    /// Column to hold the points count; created if missing, must be integer.
    #[arg(long = "count-column", value_name = "NAME")]
    pub count_column: String,

    /// Names of the statistics columns, one per column and method combination
    /// in column-major order (default: <column>_<method>).
    #[arg(long = "stats-columns", value_delimiter = ',', value_name = "NAMES")]
    pub stats_columns: Vec<String>,

    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Program used to compute statistics for a single column.
    #[arg(long = "stats-command", value_name = "PROGRAM", default_value = DEFAULT_STATS_COMMAND)]
    pub stats_command: String,

    /// Validate and print the planned commands without running them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// How progress is reported on stderr.
    #[arg(long = "progress", value_enum, default_value = "bar")]
    pub progress: ProgressArg,
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// Vector map to inspect.
    #[arg(value_name = "MAP")]
    pub map: String,

    /// Layer number.
    #[arg(long = "layer", default_value = DEFAULT_LAYER)]
    pub layer: String,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

fn parse_method(value: &str) -> Result<StatsMethod, String> {
    value.parse().map_err(|error: vstats_model::StatsError| error.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FeatureTypeArg {
    Point,
    Centroid,
}

impl From<FeatureTypeArg> for GeometryType {
    fn from(value: FeatureTypeArg) -> Self {
        match value {
            FeatureTypeArg::Point => GeometryType::Point,
            FeatureTypeArg::Centroid => GeometryType::Centroid,
        }
    }
}

/// CLI progress reporting choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressArg {
    /// Progress bar; plain lines when stderr is not a terminal.
    Bar,
    /// One percentage per line.
    Plain,
    /// No progress output.
    #[value(name = "none")]
    Off,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
