//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the parameter model.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid parameter type: {0} (expected Plain or Encrypted)")]
    InvalidParameterType(String),
}
