//! Working-set resolution.
//!
//! The set of columns to rewrite is computed once, before anything in the
//! DataFrame is mutated, and never refreshed during a call.

use std::collections::HashSet;

use polars::prelude::{DataFrame, DataType};

use crate::error::{NormalizeError, Result};
use crate::options::ColumnSelection;

/// Returns true if a column of this dtype holds textual values.
///
/// Textual means plain strings, categoricals, or the untyped `Null` dtype
/// that Polars gives a column whose values are all missing.
pub fn is_textual(dtype: &DataType) -> bool {
    dtype.is_string() || dtype.is_categorical() || matches!(dtype, DataType::Null)
}

/// Names of the textual columns of a DataFrame, in column order.
pub fn textual_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_textual(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Resolve a selection into the ordered working set.
///
/// Explicit names are validated all at once so that a missing column is
/// reported before any column is rewritten. Repeated names are kept once.
pub fn resolve_columns(df: &DataFrame, selection: &ColumnSelection) -> Result<Vec<String>> {
    let names = match selection {
        ColumnSelection::Auto => return Ok(textual_columns(df)),
        ColumnSelection::Explicit(names) => names,
    };

    let mut seen = HashSet::with_capacity(names.len());
    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        if df.column(name).is_err() {
            return Err(NormalizeError::ColumnNotFound {
                column: name.clone(),
            });
        }
        if seen.insert(name.as_str()) {
            resolved.push(name.clone());
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn mixed_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("name".into(), vec!["a", "b"]).into(),
            Series::new("age".into(), vec![1i64, 2]).into(),
            Series::full_null("empty".into(), 2, &DataType::Null).into(),
            Series::new("city".into(), vec![Some("x"), None]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_textual_columns_in_frame_order() {
        let df = mixed_frame();
        assert_eq!(textual_columns(&df), vec!["name", "empty", "city"]);
    }

    #[test]
    fn test_is_textual() {
        assert!(is_textual(&DataType::String));
        assert!(is_textual(&DataType::Null));
        assert!(!is_textual(&DataType::Int64));
        assert!(!is_textual(&DataType::Boolean));
    }

    #[test]
    fn test_resolve_explicit_keeps_order_and_dedupes() {
        let df = mixed_frame();
        let selection = ColumnSelection::explicit(["city", "age", "city"]);
        assert_eq!(resolve_columns(&df, &selection).unwrap(), vec!["city", "age"]);
    }

    #[test]
    fn test_resolve_explicit_missing_column() {
        let df = mixed_frame();
        let selection = ColumnSelection::explicit(["name", "missing_col"]);
        let err = resolve_columns(&df, &selection).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::ColumnNotFound { ref column } if column == "missing_col"
        ));
    }

    #[test]
    fn test_resolve_explicit_empty_list() {
        let df = mixed_frame();
        let selection = ColumnSelection::Explicit(Vec::new());
        assert!(resolve_columns(&df, &selection).unwrap().is_empty());
    }
}
