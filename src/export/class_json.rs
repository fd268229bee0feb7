//! Class definition exporter
//!
//! Produces the document Pimcore reads when importing a class definition.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::export::{ExportError, ExportResult};
use crate::models::ClassDefinition;

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(ExportError::SerializationError(format!(
                "Unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Exporter for Pimcore class definition documents
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassJsonExporter {
    pub format: OutputFormat,
}

impl ClassJsonExporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a class definition
    ///
    /// # Example
    ///
    /// ```rust
    /// use pimcore_class_sdk::export::ClassJsonExporter;
    /// use pimcore_class_sdk::models::ClassDefinition;
    ///
    /// let class = ClassDefinition::new("50", "Generated Class");
    /// let result = ClassJsonExporter::default().export(&class).unwrap();
    /// assert!(result.content.starts_with("{\n  \"id\": \"50\""));
    /// ```
    pub fn export(&self, class: &ClassDefinition) -> Result<ExportResult, ExportError> {
        let content = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(class)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            OutputFormat::Yaml => serde_yaml::to_string(class)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
        };
        Ok(ExportResult {
            content,
            format: self.format.as_str().to_string(),
        })
    }

    /// Render a class definition and write it to `path`
    pub fn write_to(&self, class: &ClassDefinition, path: &Path) -> Result<ExportResult, ExportError> {
        let result = self.export(class)?;
        std::fs::write(path, result.content.as_bytes())
            .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))?;
        info!("Saved class '{}' to {}", class.title, path.display());
        Ok(result)
    }
}
