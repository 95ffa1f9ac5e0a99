//! Text and header normalization for Polars DataFrames.
//!
//! This crate rewrites text-valued columns of a DataFrame in place:
//!
//! - **Values**: coerce to nullable text, trim surrounding whitespace, lowercase
//! - **Headers**: trim, lowercase, replace spaces with underscores
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use textnorm_core::{StandardizeOptions, standardize};
//!
//! let mut df = df!(
//!     "  Full Name " => [Some(" Alice "), Some("BOB"), None],
//!     "Age" => [31i64, 42, 27]
//! )
//! .unwrap();
//!
//! let df = standardize(&mut df, &StandardizeOptions::default()).unwrap();
//! let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
//! assert_eq!(names, vec!["full_name", "age"]);
//! assert_eq!(df.column("full_name").unwrap().str().unwrap().get(0), Some("alice"));
//! ```

mod error;
mod options;
mod selection;
mod standardize;
mod text;

// === Error Types ===
pub use error::{NormalizeError, Result};

// === Options ===
pub use options::{ColumnSelection, StandardizeOptions};

// === Working Set ===
pub use selection::{is_textual, resolve_columns, textual_columns};

// === Operations ===
pub use standardize::{
    HeaderRename, StandardizeReport, normalize_headers, standardize, standardize_with_report,
};
pub use text::{normalize_column, normalize_header, normalize_text};
