//! pimcore-class: generate a Pimcore class definition from a field catalog

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use pimcore_class_sdk::cli::commands::{GenerateArgs, handle_generate, handle_validate, load_config};
use pimcore_class_sdk::cli::output::{format_summary, format_validation};
use pimcore_class_sdk::export::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pimcore-class", version, about = "Generate a Pimcore class definition from a CollectiveAccess field catalog")]
struct Cli {
    /// Field catalog (CSV with a header row)
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "GeneratedClass.json")]
    output: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Class id (overrides the configuration)
    #[arg(long)]
    class_id: Option<String>,

    /// Class title (overrides the configuration)
    #[arg(long)]
    title: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Class definition JSON to start from instead of the built-in layout
    #[arg(long, conflicts_with = "no_template")]
    template: Option<PathBuf>,

    /// Start from an empty layout root
    #[arg(long)]
    no_template: bool,

    /// Fail when any catalog row has errors
    #[arg(long)]
    strict: bool,

    /// Report what would be generated without writing the output
    #[arg(long)]
    validate_only: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (warnings only, no summary)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("pimcore-class error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(class_id) = &cli.class_id {
        config.class_id = class_id.clone();
    }
    if let Some(title) = &cli.title {
        config.class_title = title.clone();
    }
    if cli.no_template {
        config.use_template = false;
    }
    if cli.strict {
        config.strict = true;
    }
    config.validate().context("invalid settings")?;

    let args = GenerateArgs {
        input: cli.input,
        output: cli.output,
        format: cli.format.into(),
        template: cli.template,
    };

    if cli.validate_only {
        let outcome = handle_validate(&args, &config)?;
        print!("{}", format_validation(&outcome.validation));
        if !cli.quiet {
            print!("{}", format_summary(&outcome.report, None));
        }
        if outcome.validation.has_errors() {
            anyhow::bail!("catalog has row errors");
        }
        return Ok(());
    }

    let outcome = handle_generate(&args, &config)?;
    if cli.quiet {
        println!("{}", args.output.display());
    } else {
        print!("{}", format_summary(&outcome.report, Some(&args.output)));
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PIMCORE_CLASS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
