//! Configuration for class generation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix CollectiveAccess puts in front of attribute bundle keys
pub const DEFAULT_BUNDLE_PREFIX: &str = "ca_attribute_";

/// Errors raised while loading or checking a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A setting has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings that drive normalization, panel mapping and class metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Class id written to the document
    pub class_id: String,
    /// Class title written to the document
    pub class_title: String,
    pub description: String,
    pub group: String,
    pub icon: String,

    /// Prefix stripped from bundle keys
    pub bundle_prefix: String,
    /// Separator between container key and field name in bundle keys
    pub bundle_separator: char,
    /// Separator between entries of the `List Values` column
    pub list_delimiter: char,
    /// Field delimiter of the catalog file
    pub csv_delimiter: char,

    /// Screen id -> technical panel name for the hand-authored panels
    pub panel_mapping: BTreeMap<String, String>,

    /// Start from the built-in layout template instead of an empty root
    pub use_template: bool,
    /// Treat row validation errors as fatal
    pub strict: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_id: "50".to_string(),
            class_title: "Generated Class".to_string(),
            description: String::new(),
            group: String::new(),
            icon: String::new(),
            bundle_prefix: DEFAULT_BUNDLE_PREFIX.to_string(),
            bundle_separator: '.',
            list_delimiter: ';',
            csv_delimiter: ',',
            panel_mapping: default_panel_mapping(),
            use_template: true,
            strict: false,
        }
    }
}

/// Mapping for the panels of the built-in template
pub fn default_panel_mapping() -> BTreeMap<String, String> {
    [
        ("IDENTIFICAZIONE", "Identificazione"),
        ("CONTROLLO E NOTE", "Controllo e note"),
        ("MEDIA E COLLEGAMENTI", "Media"),
    ]
    .into_iter()
    .map(|(screen, panel)| (screen.to_string(), panel.to_string()))
    .collect()
}

impl GeneratorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parse a TOML configuration; missing keys keep their defaults
    #[cfg(feature = "cli")]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.class_id.trim().is_empty() {
            return Err(ConfigError::Invalid("class id must not be empty".to_string()));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "CSV delimiter '{}' is not a single-byte character",
                self.csv_delimiter
            )));
        }
        if self.bundle_separator.is_whitespace() {
            return Err(ConfigError::Invalid(
                "bundle separator must not be whitespace".to_string(),
            ));
        }
        if let Some((screen, _)) = self.panel_mapping.iter().find(|(_, panel)| panel.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "panel mapping for screen '{}' is empty",
                screen
            )));
        }
        Ok(())
    }
}

/// Builder for GeneratorConfig
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn class_id(mut self, id: impl Into<String>) -> Self {
        self.config.class_id = id.into();
        self
    }

    pub fn class_title(mut self, title: impl Into<String>) -> Self {
        self.config.class_title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.config.group = group.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config.icon = icon.into();
        self
    }

    pub fn bundle_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.bundle_prefix = prefix.into();
        self
    }

    pub fn bundle_separator(mut self, separator: char) -> Self {
        self.config.bundle_separator = separator;
        self
    }

    pub fn list_delimiter(mut self, delimiter: char) -> Self {
        self.config.list_delimiter = delimiter;
        self
    }

    pub fn csv_delimiter(mut self, delimiter: char) -> Self {
        self.config.csv_delimiter = delimiter;
        self
    }

    /// Replace the whole screen -> panel table
    pub fn panel_mapping(mut self, mapping: BTreeMap<String, String>) -> Self {
        self.config.panel_mapping = mapping;
        self
    }

    /// Add or replace one screen -> panel entry
    pub fn map_panel(mut self, screen_id: impl Into<String>, panel: impl Into<String>) -> Self {
        self.config
            .panel_mapping
            .insert(screen_id.into(), panel.into());
        self
    }

    pub fn use_template(mut self, use_template: bool) -> Self {
        self.config.use_template = use_template;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.class_id, "50");
        assert_eq!(config.bundle_prefix, "ca_attribute_");
        assert_eq!(config.bundle_separator, '.');
        assert_eq!(config.list_delimiter, ';');
        assert_eq!(config.panel_mapping.len(), 3);
        assert_eq!(
            config.panel_mapping.get("MEDIA E COLLEGAMENTI").map(String::as_str),
            Some("Media")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::builder()
            .class_id("12")
            .class_title("Fondo")
            .csv_delimiter(';')
            .map_panel("SOGGETTI", "Soggetti")
            .strict(true)
            .build();

        assert_eq!(config.class_id, "12");
        assert_eq!(config.class_title, "Fondo");
        assert_eq!(config.csv_delimiter, ';');
        assert_eq!(config.panel_mapping.len(), 4);
        assert!(config.strict);
    }

    #[test]
    fn test_validate_rejects_empty_class_id() {
        let config = GeneratorConfig::builder().class_id("  ").build();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_multibyte_delimiter() {
        let config = GeneratorConfig::builder().csv_delimiter('§').build();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_from_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml(
            r#"
classId = "77"
csvDelimiter = ";"

[panelMapping]
"DESCRIZIONE" = "Descrizione"
"#,
        )
        .unwrap();

        assert_eq!(config.class_id, "77");
        assert_eq!(config.csv_delimiter, ';');
        assert_eq!(config.bundle_prefix, DEFAULT_BUNDLE_PREFIX);
        // A table in the file replaces the built-in one
        assert_eq!(config.panel_mapping.len(), 1);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_from_toml_reports_parse_errors() {
        let err = GeneratorConfig::from_toml("classId = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
