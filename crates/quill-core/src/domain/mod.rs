//! Domain entities and the queries that run over them.

mod post;
pub mod query;

pub use post::{DEFAULT_AUTHOR, DEFAULT_CATEGORY, NewPost, Post, PostDraft, PostPatch};
pub use query::{
    ListQuery, Page, PageMeta, PageRequest, PostListing, SearchQuery, SortDirection, SortField,
};
