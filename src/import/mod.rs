//! Import functionality
//!
//! Turns a field catalog into normalized field specifications:
//! - CSV tokenizing into raw rows (`catalog`)
//! - Row normalization into `FieldSpec` values (`normalize`)

pub mod catalog;
pub mod normalize;

use std::collections::HashMap;

/// Column labels of the field catalog
pub mod columns {
    pub const SCREEN_ID: &str = "Screen ID";
    pub const BUNDLE: &str = "Bundle";
    pub const DATATYPE: &str = "Datatype";
    pub const NAME: &str = "Name";
    pub const IS_CONTAINER: &str = "is container";
    pub const IS_RIPETIBILE: &str = "is ripetibile";
    pub const WYSIWYG: &str = "wysiwyg";
    pub const LIST_VALUES: &str = "List Values";

    /// Columns a row cannot do without
    pub const REQUIRED: [&str; 3] = [SCREEN_ID, BUNDLE, DATATYPE];
}

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// One catalog record: column label -> cell text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell value, `None` when the column is absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Cell value, or the empty string when the column is absent
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

// Re-export for convenience
pub use catalog::CsvImporter;
pub use normalize::{BundleKey, RowNormalizer};
