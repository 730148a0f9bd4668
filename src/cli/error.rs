//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::{InfraError, StoreError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Credentials { .. } => crate::exitcode::NOPERM,
                InfraError::Application(e) => match e {
                    ApplicationError::Store(StoreError::NotFound(_)) => crate::exitcode::NOINPUT,
                    // A conflict only escapes the create flow if the overwrite
                    // itself is refused, which is a remote failure.
                    ApplicationError::Store(
                        StoreError::AlreadyExists(_) | StoreError::Remote { .. },
                    ) => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Confirmation(_) => crate::exitcode::IOERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}
