//! CLI argument definitions for textnorm.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "textnorm",
    version,
    about = "Normalize text columns and headers of a CSV table",
    long_about = "Normalize text columns and headers of a CSV table.\n\n\
                  Text values are trimmed and lowercased; headers are trimmed,\n\
                  lowercased and have spaces replaced with underscores."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize a CSV file and write the result.
    Standardize(StandardizeArgs),
}

#[derive(Parser)]
pub struct StandardizeArgs {
    /// CSV file to standardize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT_STEM>.standardized.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file with standardization options; flags below override it.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only rewrite these columns (comma separated, names as in the input).
    ///
    /// Without this flag every text column is rewritten. A header that itself
    /// contains a comma cannot be named here; select it through `--config`.
    #[arg(long = "columns", value_name = "NAME", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Keep the case of values.
    #[arg(long = "no-lower")]
    pub no_lower: bool,

    /// Keep leading and trailing whitespace of values.
    #[arg(long = "no-strip")]
    pub no_strip: bool,

    /// Leave header names as they are.
    #[arg(long = "keep-headers")]
    pub keep_headers: bool,

    /// Standardize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// How to print the run summary.
    #[arg(long = "report", value_enum, default_value = "table")]
    pub report: ReportFormatArg,
}

/// CLI summary format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
