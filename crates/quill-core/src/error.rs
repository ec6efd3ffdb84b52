//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: u64 },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A required creation field is absent. `field` is `"payload"` when
    /// nothing usable was sent at all.
    #[error("{}", missing_field_message(.field))]
    MissingField { field: &'static str },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }

    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery(reason.into())
    }
}

fn missing_field_message(field: &str) -> String {
    if field == "payload" {
        "No data provided".to_string()
    } else {
        format!("No {} provided", field)
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage failure: {0}")]
    Storage(String),
}
