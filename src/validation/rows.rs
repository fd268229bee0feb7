//! Catalog row validation
//!
//! Checks raw rows before generation. Errors mark rows that cannot produce
//! a field; warnings mark rows that produce something other than the
//! catalog author probably meant. Generation never depends on this pass,
//! but strict mode refuses to run while errors remain.

use std::fmt;

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::generator::resolver::duplicate_container_names;
use crate::import::{RawRow, RowNormalizer, columns};
use crate::models::{Datatype, Definition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One finding, tied to a 1-based data row when it concerns a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    pub row: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {}: {}: {}", row, self.severity, self.message),
            None => write!(f, "layout: {}: {}", self.severity, self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowValidationReport {
    pub rows_checked: usize,
    pub issues: Vec<RowIssue>,
}

impl RowValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &RowIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &RowIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Flag container names a layout uses more than once
    ///
    /// Placement by name only ever reaches the first of them.
    pub fn check_layout(&mut self, root: &Definition) {
        for (name, count) in duplicate_container_names(root) {
            self.issues.push(RowIssue {
                row: None,
                severity: Severity::Warning,
                message: format!(
                    "container name '{}' is used {} times, only the first receives fields",
                    name, count
                ),
            });
        }
    }

    fn push(&mut self, row: usize, severity: Severity, message: String) {
        self.issues.push(RowIssue {
            row: Some(row),
            severity,
            message,
        });
    }
}

/// Validates catalog rows with the normalization settings of a config
#[derive(Debug, Clone, Default)]
pub struct RowValidator {
    normalizer: RowNormalizer,
}

impl RowValidator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            normalizer: RowNormalizer::from_config(config),
        }
    }

    pub fn validate(&self, rows: &[RawRow]) -> RowValidationReport {
        let mut report = RowValidationReport {
            rows_checked: rows.len(),
            ..RowValidationReport::default()
        };

        for (index, raw) in rows.iter().enumerate() {
            let row = index + 1;

            for column in columns::REQUIRED {
                if raw.get_or_empty(column).trim().is_empty() {
                    report.push(row, Severity::Error, format!("missing '{}'", column));
                }
            }

            let bundle = raw.get_or_empty(columns::BUNDLE);
            if !bundle.trim().is_empty() {
                let key = self.normalizer.split_bundle(bundle);
                if key.name.is_empty() {
                    report.push(
                        row,
                        Severity::Error,
                        format!("bundle '{}' yields an empty field name", bundle),
                    );
                }
                if key.ignored_segments > 0 {
                    report.push(
                        row,
                        Severity::Warning,
                        format!(
                            "bundle '{}' has {} extra segment(s), only '{}' is used",
                            bundle, key.ignored_segments, key.name
                        ),
                    );
                }
            }

            let spec = self.normalizer.normalize(raw);
            if spec.is_structural() {
                continue;
            }
            match &spec.datatype {
                Datatype::Other(other) if !other.is_empty() => report.push(
                    row,
                    Severity::Warning,
                    format!("datatype '{}' is not supported, row will be skipped", other),
                ),
                Datatype::List if spec.list_values.is_empty() => report.push(
                    row,
                    Severity::Warning,
                    format!("list field '{}' has no values", spec.name),
                ),
                _ => {}
            }
        }

        report
    }
}

/// Validate rows with the settings of `config`
pub fn validate_rows(rows: &[RawRow], config: &GeneratorConfig) -> RowValidationReport {
    RowValidator::new(config).validate(rows)
}
