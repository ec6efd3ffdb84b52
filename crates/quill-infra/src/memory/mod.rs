//! In-memory implementations.

mod post_repo;

pub use post_repo::{InMemoryPostRepository, seed_posts};
