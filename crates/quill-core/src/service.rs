//! Post collection service - validation and query processing over a
//! [`PostRepository`].

use std::sync::Arc;

use crate::domain::{ListQuery, Post, PostDraft, PostListing, PostPatch, SearchQuery};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Entry point for every post operation. All validation happens here,
/// before the repository is touched.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List posts, optionally sorted and paginated.
    pub async fn list(&self, query: ListQuery) -> Result<PostListing, DomainError> {
        let posts = self.repo.all().await?;
        tracing::debug!(
            total = posts.len(),
            sort = ?query.sort,
            direction = ?query.direction,
            page = ?query.page,
            "Listing posts"
        );
        Ok(query.apply(posts))
    }

    /// Fetch a single post.
    pub async fn get(&self, id: u64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Validate a draft and store it under the next free id.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let new_post = draft.validate()?;
        let post = self.repo.insert(new_post).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Change `title` and/or `content` of an existing post.
    pub async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, DomainError> {
        let post = self
            .repo
            .update(id, patch)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Remove a post, returning its id.
    pub async fn delete(&self, id: u64) -> Result<u64, DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::post_not_found(id));
        }
        tracing::info!(post_id = id, "Post deleted");
        Ok(id)
    }

    /// Substring search over titles and contents, in natural order.
    pub async fn search(&self, query: SearchQuery) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.all().await?;
        let found = query.filter(posts);
        tracing::debug!(matches = found.len(), "Searched posts");
        Ok(found)
    }
}
