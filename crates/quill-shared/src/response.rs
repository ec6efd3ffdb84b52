//! Standardized API response types.

use serde::{Deserialize, Serialize};

/// Plain confirmation message, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_deleted(id: u64) -> Self {
        Self::new(format!("Post with id {} has been deleted successfully.", id))
    }
}

/// Error body. `error` is the human-readable reason; the remaining fields
/// follow RFC 7807 Problem Details.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Explanation specific to this occurrence.
    pub error: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            title: title.into(),
            status,
        }
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(404, "Not Found", error)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error", "Internal server error")
    }
}
