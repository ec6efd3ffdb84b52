//! In-memory post repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Posts the service starts with.
pub fn seed_posts() -> Vec<NewPost> {
    vec![
        NewPost::new("First post", "This is the first post."),
        NewPost::new("Second post", "This is the second post."),
    ]
}

/// Post collection held in a `Vec` behind an async RwLock.
///
/// The `Vec` order is insertion order. Each trait method takes the lock once
/// for its whole duration, so id assignment and lookups never interleave
/// with another mutation.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Repository pre-filled with [`seed_posts`].
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    /// Repository pre-filled with the given posts, numbered from 1.
    pub fn with_posts(new_posts: impl IntoIterator<Item = NewPost>) -> Self {
        let posts = new_posts
            .into_iter()
            .zip(1u64..)
            .map(|(new_post, id)| Post::new(id, new_post))
            .collect();

        Self {
            posts: RwLock::new(posts),
        }
    }

    fn next_id(posts: &[Post]) -> u64 {
        posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let post = Post::new(Self::next_id(&posts), new_post);
        posts.push(post.clone());

        tracing::debug!(post_id = post.id, total = posts.len(), "Inserted post");
        Ok(post)
    }

    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.apply(patch);

        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: u64) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;

        match posts.iter().position(|p| p.id == id) {
            Some(index) => {
                // `remove` keeps the remaining posts in order.
                posts.remove(index);
                tracing::debug!(post_id = id, total = posts.len(), "Removed post");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}
