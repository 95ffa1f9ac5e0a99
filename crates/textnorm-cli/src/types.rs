use std::path::PathBuf;

use serde::Serialize;
use textnorm_core::{StandardizeOptions, StandardizeReport};

/// Result of one `textnorm standardize` run.
#[derive(Debug, Serialize)]
pub struct StandardizeOutcome {
    pub input: PathBuf,
    /// Where the standardized table was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub options: StandardizeOptions,
    pub report: StandardizeReport,
}
