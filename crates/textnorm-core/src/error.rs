//! Error types for text normalization.

use thiserror::Error;

/// Errors that can occur while standardizing a DataFrame.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// An explicitly selected column does not exist in the DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// A column's values cannot be represented as text.
    #[error("cannot convert column '{column}' of type {dtype} to text: {message}")]
    TypeCoercion {
        column: String,
        dtype: String,
        message: String,
    },

    /// Header normalization would give two columns the same name.
    #[error("headers '{first}' and '{second}' both normalize to '{column}'")]
    HeaderCollision {
        column: String,
        first: String,
        second: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::ColumnNotFound {
            column: "missing_col".to_string(),
        };
        assert_eq!(err.to_string(), "column 'missing_col' not found in DataFrame");
    }

    #[test]
    fn test_header_collision_display() {
        let err = NormalizeError::HeaderCollision {
            column: "full_name".to_string(),
            first: "Full Name".to_string(),
            second: " full name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "headers 'Full Name' and ' full name' both normalize to 'full_name'"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let err: NormalizeError = polars_err.into();
        assert!(matches!(err, NormalizeError::DataFrame { .. }));
    }
}
