//! Row normalization
//!
//! Converts a [`RawRow`] into a [`FieldSpec`]. Normalization is lenient:
//! absent columns become empty values and nothing here ever fails. Rows
//! that come out unusable are caught by `validation::rows` and skipped by
//! the placement pass.

use tracing::debug;

use super::{RawRow, columns};
use crate::config::{DEFAULT_BUNDLE_PREFIX, GeneratorConfig};
use crate::models::{Datatype, FieldSpec};

/// Literal that marks a flag column as set
const FLAG_TRUE: &str = "TRUE";

/// Bundle key after prefix removal and compound splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleKey {
    /// Local field name
    pub name: String,
    /// Logical parent container of a compound key
    pub container_key: Option<String>,
    /// Segments past the second one, which are dropped
    pub ignored_segments: usize,
}

/// Turns raw catalog rows into field specifications
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    prefix: String,
    separator: char,
    list_delimiter: char,
}

impl Default for RowNormalizer {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_BUNDLE_PREFIX.to_string(),
            separator: '.',
            list_delimiter: ';',
        }
    }
}

impl RowNormalizer {
    pub fn new(prefix: impl Into<String>, separator: char, list_delimiter: char) -> Self {
        Self {
            prefix: prefix.into(),
            separator,
            list_delimiter,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.bundle_prefix.clone(),
            config.bundle_separator,
            config.list_delimiter,
        )
    }

    /// Normalize one row
    pub fn normalize(&self, row: &RawRow) -> FieldSpec {
        let bundle = row.get_or_empty(columns::BUNDLE);
        let key = self.split_bundle(bundle);

        FieldSpec {
            screen_id: row.get_or_empty(columns::SCREEN_ID).trim().to_string(),
            bundle: bundle.to_string(),
            datatype: Datatype::parse(row.get_or_empty(columns::DATATYPE).trim()),
            name: key.name,
            title: row.get_or_empty(columns::NAME).to_string(),
            is_container: is_flag_set(row, columns::IS_CONTAINER),
            is_ripetibile: is_flag_set(row, columns::IS_RIPETIBILE),
            wysiwyg: is_flag_set(row, columns::WYSIWYG),
            list_values: self.split_list(row.get_or_empty(columns::LIST_VALUES)),
            container_key: key.container_key,
        }
    }

    /// Normalize every row, keeping input order
    pub fn normalize_all(&self, rows: &[RawRow]) -> Vec<FieldSpec> {
        let specs: Vec<FieldSpec> = rows.iter().map(|row| self.normalize(row)).collect();
        for spec in &specs {
            debug!(
                screen = %spec.screen_id,
                name = %spec.name,
                datatype = %spec.datatype,
                "Normalized field spec"
            );
        }
        specs
    }

    /// Strip the prefix and split a compound `container.field` key
    ///
    /// The prefix is removed as long as it is present, so the result never
    /// starts with it. Only the first two segments of a compound key are
    /// used; anything after the second separator is ignored.
    pub fn split_bundle(&self, bundle: &str) -> BundleKey {
        let stripped = self.strip_prefix(bundle.trim());

        match stripped.split_once(self.separator) {
            Some((container, rest)) => {
                let mut segments = rest.split(self.separator);
                let name = segments.next().unwrap_or_default();
                BundleKey {
                    name: self.strip_prefix(name).to_string(),
                    container_key: Some(container.to_string()),
                    ignored_segments: segments.count(),
                }
            }
            None => BundleKey {
                name: stripped.to_string(),
                container_key: None,
                ignored_segments: 0,
            },
        }
    }

    fn strip_prefix<'a>(&self, mut value: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return value;
        }
        while let Some(rest) = value.strip_prefix(self.prefix.as_str()) {
            value = rest;
        }
        value
    }

    fn split_list(&self, raw: &str) -> Vec<String> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        raw.split(self.list_delimiter)
            .map(|value| value.trim().to_string())
            .collect()
    }
}

fn is_flag_set(row: &RawRow, column: &str) -> bool {
    row.get(column) == Some(FLAG_TRUE)
}
