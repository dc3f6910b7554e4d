//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Tree(e) => match e {
                TreeError::FileNotFound(_) | TreeError::NotADirectory(_) => {
                    crate::exitcode::NOINPUT
                }
                TreeError::PathResolution { .. } => crate::exitcode::IOERR,
                TreeError::Config { .. } => crate::exitcode::CONFIG,
                TreeError::Exhausted => crate::exitcode::SOFTWARE,
            },
        }
    }
}
