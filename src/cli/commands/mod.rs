//! CLI command implementations

pub mod generate;
pub mod validate;

pub use generate::{GenerateArgs, GenerateOutcome, handle_generate, load_config, load_template};
pub use validate::handle_validate;
