//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::domain::error::GenerationError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Generation(#[from] GenerationError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => exitcode::USAGE,
            CliError::Config(_) => exitcode::CONFIG,
            CliError::ConfigRender(_) => exitcode::SOFTWARE,
        }
    }
}
