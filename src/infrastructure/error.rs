//! Infrastructure-level errors

use thiserror::Error;

use crate::application::ApplicationError;

/// Errors reported by a parameter store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter already exists: {0}")]
    AlreadyExists(String),

    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("{operation} failed: {message}")]
    Remote { operation: String, message: String },
}

impl StoreError {
    /// Create a remote error for a named API operation.
    pub fn remote(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for parameter store calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("no usable credentials for profile '{profile}': {message}")]
    Credentials { profile: String, message: String },

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a credential resolution error for an AWS profile.
    pub fn credentials(profile: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Credentials {
            profile: profile.into(),
            message: message.into(),
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
