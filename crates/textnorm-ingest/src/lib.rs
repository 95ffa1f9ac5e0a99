//! CSV ingestion for textnorm.
//!
//! Loads CSV files into Polars DataFrames with their headers kept verbatim,
//! so that header normalization sees exactly what the file contains, and
//! writes standardized frames back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use textnorm_ingest::{read_csv_table, write_csv_table};
//!
//! let mut df = read_csv_table(Path::new("people.csv"))?;
//! write_csv_table(&mut df, Path::new("people.standardized.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use csv::{read_csv_table, validate_encoding, write_csv_table};
