//! Value-level and column-level text normalization.

use polars::prelude::*;

use crate::error::{NormalizeError, Result};

/// Normalize a single text value.
///
/// Trimming happens before lowercasing. Case conversion is the Unicode
/// default mapping with no locale tailoring.
///
/// # Examples
///
/// ```
/// use textnorm_core::normalize_text;
///
/// assert_eq!(normalize_text("  Alice ", true, true), "alice");
/// assert_eq!(normalize_text("  Alice ", false, true), "  alice ");
/// assert_eq!(normalize_text("  Alice ", true, false), "Alice");
/// ```
pub fn normalize_text(value: &str, strip: bool, lower: bool) -> String {
    let value = if strip { value.trim() } else { value };
    if lower {
        value.to_lowercase()
    } else {
        value.to_string()
    }
}

/// Normalize a column header: trim, lowercase, then replace every space
/// with an underscore.
///
/// Only the ASCII space is replaced; inner tabs or other whitespace survive.
///
/// # Examples
///
/// ```
/// use textnorm_core::normalize_header;
///
/// assert_eq!(normalize_header("  Full Name "), "full_name");
/// assert_eq!(normalize_header("Age"), "age");
/// assert_eq!(normalize_header("First  Visit"), "first__visit");
/// ```
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Coerce a column to nullable text and normalize every non-null value.
///
/// Values that are already text keep their content; numbers and booleans
/// take their Polars string form; nulls and float NaN become null. The
/// returned column has the same name, length and row order as the input.
pub fn normalize_column(column: &Column, strip: bool, lower: bool) -> Result<Column> {
    let nan_rows = nan_rows(column)?;
    let text = coerce_to_text(column)?;
    let chunked = text.str()?;

    let values: Vec<Option<String>> = chunked
        .iter()
        .enumerate()
        .map(|(idx, opt_val)| {
            if nan_rows.as_ref().is_some_and(|rows| rows[idx]) {
                return None;
            }
            opt_val.map(|val| normalize_text(val, strip, lower))
        })
        .collect();

    Ok(Series::new(column.name().clone(), values).into())
}

/// Per-row NaN flags for float columns, `None` for every other dtype.
fn nan_rows(column: &Column) -> Result<Option<Vec<bool>>> {
    if !column.dtype().is_float() {
        return Ok(None);
    }
    let floats = column.cast(&DataType::Float64)?;
    let rows = floats
        .f64()?
        .iter()
        .map(|value| value.is_some_and(f64::is_nan))
        .collect();
    Ok(Some(rows))
}

fn coerce_to_text(column: &Column) -> Result<Column> {
    let dtype = column.dtype();
    if dtype.is_nested() {
        return Err(NormalizeError::TypeCoercion {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
            message: "nested values have no text form".to_string(),
        });
    }

    column
        .cast(&DataType::String)
        .map_err(|e| NormalizeError::TypeCoercion {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_keeps_inner_whitespace() {
        assert_eq!(normalize_text("\t New  York \n", true, true), "new  york");
    }

    #[test]
    fn test_normalize_text_unicode_lowercase() {
        assert_eq!(normalize_text("ÉCOLE", true, true), "école");
    }

    #[test]
    fn test_normalize_text_no_op() {
        assert_eq!(normalize_text(" Mixed ", false, false), " Mixed ");
    }

    #[test]
    fn test_normalize_header_order() {
        // Trim runs first, so outer spaces never become underscores.
        assert_eq!(normalize_header("  Full Name "), "full_name");
        assert_eq!(normalize_header("already_clean"), "already_clean");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_normalize_column_strings_with_nulls() {
        let column: Column =
            Series::new("name".into(), vec![Some(" Alice "), Some("BOB"), None]).into();
        let normalized = normalize_column(&column, true, true).unwrap();

        assert_eq!(normalized.name().as_str(), "name");
        let ca = normalized.str().unwrap();
        assert_eq!(ca.get(0), Some("alice"));
        assert_eq!(ca.get(1), Some("bob"));
        assert_eq!(ca.get(2), None);
    }

    #[test]
    fn test_normalize_column_coerces_integers() {
        let column: Column = Series::new("age".into(), vec![Some(42i64), None, Some(7)]).into();
        let normalized = normalize_column(&column, true, true).unwrap();

        assert_eq!(normalized.dtype(), &DataType::String);
        let ca = normalized.str().unwrap();
        assert_eq!(ca.get(0), Some("42"));
        assert_eq!(ca.get(1), None);
        assert_eq!(ca.get(2), Some("7"));
    }

    #[test]
    fn test_normalize_column_coerces_booleans() {
        let column: Column = Series::new("flag".into(), vec![true, false]).into();
        let normalized = normalize_column(&column, true, true).unwrap();

        let ca = normalized.str().unwrap();
        assert_eq!(ca.get(0), Some("true"));
        assert_eq!(ca.get(1), Some("false"));
    }

    #[test]
    fn test_normalize_column_float_nan_becomes_null() {
        let column: Column =
            Series::new("score".into(), vec![Some(1.5f64), Some(f64::NAN), None]).into();
        let normalized = normalize_column(&column, true, true).unwrap();

        assert_eq!(normalized.dtype(), &DataType::String);
        let ca = normalized.str().unwrap();
        assert_eq!(ca.get(0), Some("1.5"));
        assert_eq!(ca.get(1), None);
        assert_eq!(ca.get(2), None);
    }

    #[test]
    fn test_normalize_column_keeps_literal_nan_text() {
        let column: Column = Series::new("word".into(), vec!["NaN"]).into();
        let normalized = normalize_column(&column, true, true).unwrap();

        assert_eq!(normalized.str().unwrap().get(0), Some("nan"));
    }

    #[test]
    fn test_normalize_column_rejects_lists() {
        let inner = Series::new("".into(), vec![1i32, 2]);
        let column: Column = Series::new("tags".into(), vec![inner]).into();
        let result = normalize_column(&column, true, true);

        assert!(matches!(
            result,
            Err(NormalizeError::TypeCoercion { ref column, .. }) if column == "tags"
        ));
    }
}
