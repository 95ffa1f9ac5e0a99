//! Options controlling how a DataFrame is standardized.

use serde::{Deserialize, Serialize};

/// Which columns have their values rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelection {
    /// Every column whose dtype is textual when the call starts.
    #[default]
    Auto,
    /// The named columns, in the given order. Every name must exist.
    Explicit(Vec<String>),
}

impl ColumnSelection {
    /// Build an explicit selection from any list of names.
    pub fn explicit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(names.into_iter().map(Into::into).collect())
    }
}

/// Options for [`standardize`](crate::standardize).
///
/// The three toggles are independent. With all of them off the call leaves
/// the DataFrame untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizeOptions {
    /// Columns whose values are rewritten.
    pub columns: ColumnSelection,
    /// Lowercase every non-null value.
    pub lower: bool,
    /// Trim leading and trailing whitespace from every non-null value.
    pub strip: bool,
    /// Rewrite every header: trim, lowercase, spaces to underscores.
    pub normalize_headers: bool,
}

impl Default for StandardizeOptions {
    fn default() -> Self {
        Self {
            columns: ColumnSelection::Auto,
            lower: true,
            strip: true,
            normalize_headers: true,
        }
    }
}

impl StandardizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict value rewriting to the named columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = ColumnSelection::explicit(names);
        self
    }

    #[must_use]
    pub fn with_lower(mut self, enable: bool) -> Self {
        self.lower = enable;
        self
    }

    #[must_use]
    pub fn with_strip(mut self, enable: bool) -> Self {
        self.strip = enable;
        self
    }

    #[must_use]
    pub fn with_normalize_headers(mut self, enable: bool) -> Self {
        self.normalize_headers = enable;
        self
    }

    /// Returns true if the values of selected columns will change at all.
    pub fn rewrites_values(&self) -> bool {
        self.lower || self.strip
    }
}
