//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state around a fresh in-memory collection.
    pub fn new(config: &AppConfig) -> Self {
        let repo = if config.seed_posts {
            InMemoryPostRepository::seeded()
        } else {
            tracing::info!("Seeding disabled - starting with an empty collection");
            InMemoryPostRepository::new()
        };

        tracing::info!("Application state initialized");

        Self::with_repository(Arc::new(repo))
    }

    /// Build the state on top of an existing repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }
}
