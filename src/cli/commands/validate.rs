//! Validate command implementation

use crate::cli::commands::generate::{GenerateArgs, GenerateOutcome, build};
use crate::cli::error::CliError;
use crate::config::GeneratorConfig;

/// Handle the validate-only mode
///
/// Runs the whole pass in memory and reports what generation would do,
/// without writing the output file.
pub fn handle_validate(args: &GenerateArgs, config: &GeneratorConfig) -> Result<GenerateOutcome, CliError> {
    build(args, config)
}
