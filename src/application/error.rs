//! Application-level errors (wraps store errors)

use thiserror::Error;

use crate::infrastructure::StoreError;

/// Application errors wrap lower-level errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("reading confirmation failed: {0}")]
    Confirmation(#[source] std::io::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
