//! Domain Layer - Errors

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            DomainError::InvalidInput(err.to_string())
        } else {
            DomainError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::InvalidInput("price \"free\"".into()).to_string(),
            "Invalid input: price \"free\""
        );
        assert_eq!(DomainError::NotFound("p-1".into()).to_string(), "Not found: p-1");
    }

    #[test]
    fn test_json_syntax_error_is_invalid_input() {
        let err = serde_json::from_str::<u32>("{not json").unwrap_err();
        assert!(matches!(DomainError::from(err), DomainError::InvalidInput(_)));
    }
}
