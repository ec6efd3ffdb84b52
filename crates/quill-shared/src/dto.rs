//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of a create request. Required fields are optional here so that a
/// missing one can be reported by name instead of as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
}

/// Body of an update request. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /api/posts`. Values stay raw so the domain layer
/// can reject them with a readable reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Query string of `GET /api/posts/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPostsParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchPostsParams {
    /// Build from raw query pairs. The first occurrence of a key wins and
    /// unknown keys are ignored, so this never fails.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut params.title,
                "content" => &mut params.content,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Page metadata attached to a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// A paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedPosts<T> {
    pub posts: Vec<T>,
    pub pagination: PaginationInfo,
}
