use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_CATEGORY: &str = "General";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub category: String,
    pub likes: u64,
}

impl Post {
    /// Create a post from validated input, stamping the creation time.
    pub fn new(id: u64, new_post: NewPost) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created_at: Utc::now(),
            tags: new_post.tags,
            category: new_post.category,
            likes: 0,
        }
    }

    /// Apply a partial update. Absent fields are left untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Unvalidated creation input. Every field may be absent.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
}

impl PostDraft {
    /// Check required fields and fill in defaults.
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let title = self
            .title
            .ok_or(DomainError::MissingField { field: "title" })?;
        let content = self
            .content
            .ok_or(DomainError::MissingField { field: "content" })?;

        Ok(NewPost {
            title,
            content,
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            tags: self.tags.unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
    }
}

/// Validated creation input, ready to be assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub category: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: Vec::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Fields an update may change.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
