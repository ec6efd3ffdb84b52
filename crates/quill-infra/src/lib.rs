//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Storage is in-memory only; nothing survives a restart.

pub mod memory;

pub use memory::{InMemoryPostRepository, seed_posts};
