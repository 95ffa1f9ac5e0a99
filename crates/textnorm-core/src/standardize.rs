//! The `standardize` operation.
//!
//! Steps, in order:
//!
//! 1. Resolve the working set (explicit names, or textual columns)
//! 2. Rewrite each working-set column: coerce to text, trim, lowercase
//! 3. Optionally rewrite every header: trim, lowercase, spaces to underscores
//!
//! The DataFrame is mutated in place and the same reference is handed back.
//! Missing columns and header collisions are detected before step 2, so those
//! errors never leave the frame half-rewritten. A type coercion failure in
//! step 2 does: columns processed before the failing one keep their new
//! values.

use std::collections::HashMap;

use polars::prelude::{Column, DataFrame};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{NormalizeError, Result};
use crate::options::StandardizeOptions;
use crate::selection::resolve_columns;
use crate::text::{normalize_column, normalize_header};

/// A header that changed during header normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRename {
    pub from: String,
    pub to: String,
}

/// What a call to [`standardize_with_report`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StandardizeReport {
    /// Working-set columns, named as they were before header normalization.
    pub columns: Vec<String>,
    /// Number of rows in the frame.
    pub rows: usize,
    /// Headers whose name actually changed.
    pub renamed_headers: Vec<HeaderRename>,
}

/// Standardize text columns and headers of a DataFrame in place.
///
/// Returns the same DataFrame reference for chaining.
///
/// # Errors
///
/// - [`NormalizeError::ColumnNotFound`] if an explicit column is missing
/// - [`NormalizeError::HeaderCollision`] if two headers normalize to one name
/// - [`NormalizeError::TypeCoercion`] if a selected column has no text form
///
/// # Examples
///
/// ```
/// use polars::prelude::*;
/// use textnorm_core::{StandardizeOptions, standardize};
///
/// let mut df = df!("  Full Name " => [" Alice ", "BOB"]).unwrap();
/// standardize(&mut df, &StandardizeOptions::default()).unwrap();
///
/// let names = df.column("full_name").unwrap().str().unwrap();
/// assert_eq!(names.get(0), Some("alice"));
/// assert_eq!(names.get(1), Some("bob"));
/// ```
pub fn standardize<'a>(
    df: &'a mut DataFrame,
    options: &StandardizeOptions,
) -> Result<&'a mut DataFrame> {
    standardize_with_report(df, options).map(|(df, _)| df)
}

/// Same as [`standardize`], also returning a [`StandardizeReport`].
pub fn standardize_with_report<'a>(
    df: &'a mut DataFrame,
    options: &StandardizeOptions,
) -> Result<(&'a mut DataFrame, StandardizeReport)> {
    let columns = resolve_columns(df, &options.columns)?;
    let planned_headers = if options.normalize_headers {
        Some(plan_headers(df)?)
    } else {
        None
    };

    for name in &columns {
        let normalized = normalize_column(df.column(name)?, options.strip, options.lower)?;
        df.with_column(normalized)?;
        debug!(
            column = %name,
            strip = options.strip,
            lower = options.lower,
            "normalized column"
        );
    }

    let renamed_headers = match planned_headers {
        Some(planned) => apply_headers(df, planned)?,
        None => Vec::new(),
    };

    info!(
        columns = columns.len(),
        rows = df.height(),
        renamed_headers = renamed_headers.len(),
        "standardized frame"
    );

    let report = StandardizeReport {
        columns,
        rows: df.height(),
        renamed_headers,
    };
    Ok((df, report))
}

/// Normalize every header of a DataFrame, leaving values untouched.
///
/// Returns the headers whose name changed, in column order.
pub fn normalize_headers(df: &mut DataFrame) -> Result<Vec<HeaderRename>> {
    let planned = plan_headers(df)?;
    apply_headers(df, planned)
}

/// Compute the normalized header for every column, failing on collisions.
fn plan_headers(df: &DataFrame) -> Result<Vec<(String, String)>> {
    let mut owners: HashMap<String, String> = HashMap::with_capacity(df.width());
    let mut planned = Vec::with_capacity(df.width());

    for name in df.get_column_names() {
        let original = name.to_string();
        let normalized = normalize_header(&original);
        if let Some(first) = owners.get(&normalized) {
            return Err(NormalizeError::HeaderCollision {
                column: normalized,
                first: first.clone(),
                second: original,
            });
        }
        owners.insert(normalized.clone(), original.clone());
        planned.push((original, normalized));
    }

    Ok(planned)
}

fn apply_headers(
    df: &mut DataFrame,
    planned: Vec<(String, String)>,
) -> Result<Vec<HeaderRename>> {
    let renamed: Vec<HeaderRename> = planned
        .iter()
        .filter(|(from, to)| from != to)
        .map(|(from, to)| HeaderRename {
            from: from.clone(),
            to: to.clone(),
        })
        .collect();

    if !renamed.is_empty() {
        let columns: Vec<Column> = df
            .get_columns()
            .iter()
            .zip(planned)
            .map(|(column, (_, to))| column.clone().with_name(to.into()))
            .collect();
        *df = DataFrame::new(columns)?;
        for rename in &renamed {
            debug!(from = %rename.from, to = %rename.to, "renamed header");
        }
    }

    Ok(renamed)
}
