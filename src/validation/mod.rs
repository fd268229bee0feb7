//! Validation functionality
//!
//! Provides validation logic for:
//! - Catalog rows (missing columns, unusable bundle keys, unknown datatypes)
//! - Generated layouts (container names that shadow each other)

pub mod rows;

pub use rows::{RowIssue, RowValidationReport, RowValidator, Severity, validate_rows};
