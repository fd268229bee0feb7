//! Export functionality
//!
//! Renders a finished class definition for Pimcore's class import:
//! - JSON, pretty printed with two-space indentation
//! - YAML, for review and diffing

pub mod class_json;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use class_json::{ClassJsonExporter, OutputFormat};
