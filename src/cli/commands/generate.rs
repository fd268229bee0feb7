//! Generate command implementation

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::error::CliError;
use crate::config::GeneratorConfig;
use crate::export::{ClassJsonExporter, OutputFormat};
use crate::generator::{ClassGenerator, GenerationReport};
use crate::import::{CsvImporter, RowNormalizer};
use crate::models::ClassDefinition;
use crate::validation::{RowValidationReport, validate_rows};

/// Inputs of one generation run
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Field catalog to read
    pub input: PathBuf,
    /// Where the class definition is written
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Class definition JSON to start from instead of the built-in layout
    pub template: Option<PathBuf>,
}

/// What a run produced
#[derive(Debug)]
pub struct GenerateOutcome {
    pub class: ClassDefinition,
    pub report: GenerationReport,
    pub validation: RowValidationReport,
}

/// Load the configuration file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, CliError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let content = read_file(path)?;
    info!("Loaded configuration from {}", path.display());
    Ok(GeneratorConfig::from_toml(&content)?)
}

/// Load a class definition JSON to use as the starting layout
pub fn load_template(path: &Path) -> Result<ClassDefinition, CliError> {
    let content = read_file(path)?;
    let class = ClassDefinition::from_json(&content)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    if !class.layout_definitions.is_container() {
        return Err(CliError::InvalidArgument(format!(
            "template {} has a '{}' layout root, expected a container",
            path.display(),
            class.layout_definitions.fieldtype()
        )));
    }
    Ok(class)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))
}

/// Read, validate, normalize and place the catalog, without writing
pub(crate) fn build(args: &GenerateArgs, config: &GeneratorConfig) -> Result<GenerateOutcome, CliError> {
    if !args.input.exists() {
        return Err(CliError::FileNotFound(args.input.clone()));
    }

    let delimiter = u8::try_from(config.csv_delimiter).map_err(|_| {
        CliError::InvalidArgument(format!("CSV delimiter '{}' is not ASCII", config.csv_delimiter))
    })?;
    let rows = CsvImporter::new(delimiter).parse_file(&args.input)?;

    let mut validation = validate_rows(&rows, config);
    if config.strict && validation.has_errors() {
        let errors: Vec<String> = validation.errors().map(|issue| format!("  {}", issue)).collect();
        return Err(CliError::ValidationError(errors.join("\n")));
    }

    let specs = RowNormalizer::from_config(config).normalize_all(&rows);

    let mut generator = match &args.template {
        Some(path) => ClassGenerator::with_base(load_template(path)?, config),
        None => ClassGenerator::from_config(config),
    };
    let report = generator.populate(&specs, &config.panel_mapping);
    validation.check_layout(generator.root());

    Ok(GenerateOutcome {
        class: generator.generate(),
        report,
        validation,
    })
}

/// Handle the generate command
pub fn handle_generate(args: &GenerateArgs, config: &GeneratorConfig) -> Result<GenerateOutcome, CliError> {
    let outcome = build(args, config)?;
    ClassJsonExporter::new(args.format).write_to(&outcome.class, &args.output)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = "\
Screen ID,Bundle,Datatype,Name,is container,is ripetibile,wysiwyg,List Values
Media,ca_attribute_caption,Text,Caption,FALSE,FALSE,FALSE,
Dati tecnici,ca_attribute_peso,Numeric,Peso,FALSE,FALSE,FALSE,
";

    fn args(dir: &TempDir, catalog: &str) -> GenerateArgs {
        let input = dir.path().join("catalog.csv");
        fs::write(&input, catalog).unwrap();
        GenerateArgs {
            input,
            output: dir.path().join("GeneratedClass.json"),
            format: OutputFormat::Json,
            template: None,
        }
    }

    #[test]
    fn test_handle_generate_writes_document() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, CATALOG);
        let outcome = handle_generate(&args, &GeneratorConfig::default()).unwrap();

        assert_eq!(outcome.report.fields_placed, 2);
        assert_eq!(outcome.report.panels_created, vec!["dati_tecnici"]);

        let written = fs::read_to_string(&args.output).unwrap();
        let class = ClassDefinition::from_json(&written).unwrap();
        assert_eq!(class.id, "50");
        assert_eq!(class.layout_definitions, outcome.class.layout_definitions);
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, CATALOG);
        args.input = dir.path().join("missing.csv");
        let err = handle_generate(&args, &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_strict_mode_rejects_row_errors() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "Screen ID,Bundle,Datatype,Name\n,ca_attribute_x,Text,X\n");

        let lenient = build(&args, &GeneratorConfig::default()).unwrap();
        assert!(lenient.validation.has_errors());

        let strict = GeneratorConfig::builder().strict(true).build();
        let err = handle_generate(&args, &strict).unwrap_err();
        assert!(matches!(err, CliError::ValidationError(_)));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_template_from_json() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, CATALOG);
        let template_path = dir.path().join("template.json");
        let base = ClassDefinition::new("1", "Base");
        fs::write(&template_path, serde_json::to_string(&base).unwrap()).unwrap();
        args.template = Some(template_path);

        let outcome = build(&args, &GeneratorConfig::default()).unwrap();
        // Without the built-in panels, every screen gets its own panel
        assert_eq!(outcome.report.panels_created, vec!["media", "dati_tecnici"]);
        assert_eq!(outcome.report.fields_placed, 2);
    }

    #[test]
    fn test_template_with_leaf_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.json");
        fs::write(&path, r#"{"layoutDefinitions": {"fieldtype": "input", "name": "x"}}"#).unwrap();
        assert!(matches!(load_template(&path), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        let missing = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(missing, Err(CliError::FileNotFound(_))));
    }
}
