//! Pimcore Class SDK - Generates Pimcore class definitions from field catalogs
//!
//! Provides unified interfaces for:
//! - Catalog import (CSV tokenizing and row normalization)
//! - Class definition models (fields, layouts, the class document)
//! - Generation (container placement, screen-to-panel mapping, built-in layout)
//! - Export to Pimcore's class import format
//! - Row and layout validation
//!
//! # Example
//!
//! ```rust
//! use pimcore_class_sdk::{ClassGenerator, CsvImporter, GeneratorConfig, RowNormalizer};
//!
//! let csv = "Screen ID,Bundle,Datatype,Name,wysiwyg\nMedia,ca_attribute_caption,Text,Caption,FALSE\n";
//! let rows = CsvImporter::default().parse(csv).unwrap();
//!
//! let config = GeneratorConfig::default();
//! let specs = RowNormalizer::from_config(&config).normalize_all(&rows);
//! let mut generator = ClassGenerator::from_config(&config);
//! let report = generator.populate(&specs, &config.panel_mapping);
//! assert_eq!(report.fields_placed, 1);
//!
//! let media = generator.find_container("Media").unwrap();
//! assert_eq!(media.children().unwrap().last().unwrap().name(), "caption");
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod generator;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, GeneratorConfig, GeneratorConfigBuilder};
pub use export::{ClassJsonExporter, ExportError, ExportResult, OutputFormat};
pub use generator::{ClassGenerator, GenerationReport, PanelMapper, SkipReason, SkippedRow};
pub use import::{CsvImporter, ImportError, RawRow, RowNormalizer};
pub use validation::{RowIssue, RowValidationReport, Severity, validate_rows};

// Re-export models
pub use models::{ClassDefinition, Datatype, Definition, FieldSpec};
