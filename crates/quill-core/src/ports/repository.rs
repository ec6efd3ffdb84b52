use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::RepoError;

/// Post storage. Each call is one atomic operation on the collection;
/// `all` returns posts in insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, in insertion order.
    async fn all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepoError>;

    /// Assign the next id (max + 1, or 1 when empty) and append.
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Apply a patch in place. `None` when no post has that id.
    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove a post. `false` when no post has that id.
    async fn delete(&self, id: u64) -> Result<bool, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.all().await?.len())
    }
}
