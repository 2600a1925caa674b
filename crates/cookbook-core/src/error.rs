//! Domain-level error types.

use thiserror::Error;

use crate::domain::{RecipeId, ValidationErrors};

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(ValidationErrors),

    #[error("Recipe not found: id {id}")]
    RecipeNotFound { id: RecipeId },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Rejected invalid record: {0}")]
    Invalid(ValidationErrors),
}

/// Store failures become [`DomainError::Internal`]; the HTTP layer logs them.
impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Invalid(errors) => DomainError::InvalidInput(errors),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures_map_to_internal() {
        let conn = DomainError::from(RepoError::Connection("pool timed out".to_string()));
        let query = DomainError::from(RepoError::Query("no such table".to_string()));

        assert!(matches!(&conn, DomainError::Internal(msg) if msg.contains("pool timed out")));
        assert!(matches!(&query, DomainError::Internal(msg) if msg.contains("no such table")));
    }

    #[test]
    fn test_rejected_record_maps_to_invalid_input() {
        let mut errors = ValidationErrors::new();
        errors.push("cooking_time", "must be greater than 0");

        let err = DomainError::from(RepoError::Invalid(errors));

        let DomainError::InvalidInput(errors) = err else {
            panic!("expected InvalidInput, got {err:?}");
        };
        assert_eq!(errors.fields(), vec!["cooking_time"]);
    }
}
