//! Domain entities: parameters as seen by the store

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Maximum number of names sent in one bulk-fetch request.
///
/// The store accepts up to 10 names per `GetParameters` call.
pub const GET_BATCH_SIZE: usize = 10;

/// Page size requested from the describe endpoint while searching.
pub const SEARCH_PAGE_SIZE: i32 = 50;

/// Answer the user must type to overwrite an existing parameter.
pub const OVERWRITE_CONFIRMATION: &str = "OVERWRITE";

/// Storage type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterType {
    /// Stored as plain text (`String` on the wire)
    #[default]
    Plain,
    /// Encrypted at rest with KMS (`SecureString` on the wire)
    Encrypted,
}

impl ParameterType {
    /// Name the store uses for this type.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ParameterType::Plain => "String",
            ParameterType::Encrypted => "SecureString",
        }
    }

    /// Map a store type name back to a domain type.
    ///
    /// `StringList` has no dedicated variant and is treated as plain text.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "SecureString" => ParameterType::Encrypted,
            _ => ParameterType::Plain,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterType::Plain => write!(f, "Plain"),
            ParameterType::Encrypted => write!(f, "Encrypted"),
        }
    }
}

impl FromStr for ParameterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Plain" | "String" => Ok(ParameterType::Plain),
            "Encrypted" | "SecureString" => Ok(ParameterType::Encrypted),
            other => Err(DomainError::InvalidParameterType(other.to_string())),
        }
    }
}

/// A named value held by the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub kind: ParameterType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Request to create (or overwrite) a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutParameter {
    pub name: String,
    pub value: String,
    pub kind: ParameterType,
    /// Replace an existing value instead of failing with "already exists"
    pub overwrite: bool,
}

impl PutParameter {
    /// Build a first-attempt request (no overwrite).
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
            overwrite: false,
        }
    }

    /// Same request with the overwrite flag set.
    pub fn overwriting(&self) -> Self {
        Self {
            overwrite: true,
            ..self.clone()
        }
    }
}

/// One page of parameter names returned by a describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub names: Vec<String>,
    /// Cursor for the next page; `None` when this was the last page
    pub next_token: Option<String>,
}

/// Terminal state of the create flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// New parameter stored
    Created,
    /// Existing parameter replaced after confirmation
    Updated,
    /// Existing parameter kept, user declined
    NotOverwritten,
    /// Store rejected the request for a reason other than "already exists"
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_and_wire_names_when_parsing_then_maps_to_type() {
        assert_eq!("Plain".parse::<ParameterType>().unwrap(), ParameterType::Plain);
        assert_eq!("String".parse::<ParameterType>().unwrap(), ParameterType::Plain);
        assert_eq!(
            "Encrypted".parse::<ParameterType>().unwrap(),
            ParameterType::Encrypted
        );
        assert_eq!(
            "SecureString".parse::<ParameterType>().unwrap(),
            ParameterType::Encrypted
        );
    }

    #[test]
    fn given_unknown_type_when_parsing_then_returns_error() {
        let err = "secure".parse::<ParameterType>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidParameterType(ref s) if s == "secure"));
    }

    #[test]
    fn given_string_list_when_mapping_from_wire_then_treated_as_plain() {
        assert_eq!(ParameterType::from_wire("StringList"), ParameterType::Plain);
        assert_eq!(
            ParameterType::from_wire("SecureString"),
            ParameterType::Encrypted
        );
    }

    #[test]
    fn given_request_when_overwriting_then_only_flag_changes() {
        let first = PutParameter::new("/app/db", "secret", ParameterType::Encrypted);
        let second = first.overwriting();

        assert!(!first.overwrite);
        assert!(second.overwrite);
        assert_eq!(second.name, first.name);
        assert_eq!(second.value, first.value);
        assert_eq!(second.kind, first.kind);
    }
}
