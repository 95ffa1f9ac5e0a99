use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use textnorm_core::{ColumnSelection, StandardizeOptions, standardize_with_report};
use textnorm_ingest::{read_csv_table, write_csv_table};

use crate::cli::StandardizeArgs;
use crate::types::StandardizeOutcome;

pub fn run_standardize(args: &StandardizeArgs) -> Result<StandardizeOutcome> {
    let run_span = info_span!("standardize", input = %args.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let options = options_from_args(args)?;
    debug!(?options, "resolved options");

    let mut df = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let (df, report) = standardize_with_report(&mut df, &options)
        .with_context(|| format!("standardize {}", args.input.display()))?;

    let output = if args.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_csv_table(df, &path).with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(
        rows = report.rows,
        columns = report.columns.len(),
        renamed_headers = report.renamed_headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "standardize complete"
    );

    Ok(StandardizeOutcome {
        input: args.input.clone(),
        output,
        options,
        report,
    })
}

/// Build standardization options from an optional JSON config file and
/// CLI flags. Flags always win over the file.
pub fn options_from_args(args: &StandardizeArgs) -> Result<StandardizeOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => StandardizeOptions::default(),
    };
    if let Some(columns) = &args.columns {
        options.columns = ColumnSelection::explicit(columns.iter().cloned());
    }
    if args.no_lower {
        options.lower = false;
    }
    if args.no_strip {
        options.strip = false;
    }
    if args.keep_headers {
        options.normalize_headers = false;
    }
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<StandardizeOptions> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse config {}", path.display()))
}

/// `<dir>/<stem>.standardized.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}.standardized.csv"))
}
