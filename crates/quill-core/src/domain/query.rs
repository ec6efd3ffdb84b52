//! Collection queries - sorting, pagination and substring search.

use std::cmp::Reverse;
use std::str::FromStr;

use super::Post;
use crate::error::DomainError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

/// Fields a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub const ALLOWED: [&'static str; 2] = ["title", "content"];

    fn value(self, post: &Post) -> &str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(DomainError::invalid_query(format!(
                "Invalid sort field '{}'. Allowed fields: {}",
                s,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DomainError::invalid_query(format!(
                "Invalid direction '{}'. Use 'asc' or 'desc'",
                s
            ))),
        }
    }
}

/// Stable, case-insensitive sort by the given field.
pub fn sort_posts(posts: &mut [Post], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Asc => posts.sort_by_cached_key(|p| field.value(p).to_lowercase()),
        SortDirection::Desc => {
            posts.sort_by_cached_key(|p| Reverse(field.value(p).to_lowercase()))
        }
    }
}

/// A requested page. Both numbers are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    /// Build a page request from raw query values. Returns `Ok(None)` when
    /// neither value was supplied.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Option<Self>, DomainError> {
        if page.is_none() && per_page.is_none() {
            return Ok(None);
        }

        let page = match page {
            Some(raw) => parse_positive("page", raw)?,
            None => DEFAULT_PAGE,
        };
        let per_page = match per_page {
            Some(raw) => parse_positive("per_page", raw)?,
            None => DEFAULT_PER_PAGE,
        };

        Ok(Some(Self { page, per_page }))
    }

    /// Cut one page out of `items`. Pages past the end are empty.
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let total_pages = total.div_ceil(self.per_page);
        let start = (self.page - 1).saturating_mul(self.per_page);

        let items = items.into_iter().skip(start).take(self.per_page).collect();

        Page {
            items,
            meta: PageMeta {
                total,
                page: self.page,
                per_page: self.per_page,
                total_pages,
                has_next: self.page < total_pages,
                has_prev: self.page > 1,
            },
        }
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, DomainError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DomainError::invalid_query(format!(
            "'{}' must be a positive integer, got '{}'",
            name, raw
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Validated listing parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortField>,
    pub direction: SortDirection,
    pub page: Option<PageRequest>,
}

impl ListQuery {
    /// Validate raw query-string values. Empty `sort` and `direction` count
    /// as absent; empty pagination values are rejected.
    pub fn parse(
        sort: Option<&str>,
        direction: Option<&str>,
        page: Option<&str>,
        per_page: Option<&str>,
    ) -> Result<Self, DomainError> {
        let sort = non_empty(sort)
            .map(str::parse::<SortField>)
            .transpose()?;
        let direction = non_empty(direction)
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();
        let page = PageRequest::parse(page, per_page)?;

        Ok(Self {
            sort,
            direction,
            page,
        })
    }

    /// Sort first, then paginate if a page was requested.
    pub fn apply(&self, mut posts: Vec<Post>) -> PostListing {
        if let Some(field) = self.sort {
            sort_posts(&mut posts, field, self.direction);
        }

        match self.page {
            Some(page) => PostListing::Paged(page.paginate(posts)),
            None => PostListing::All(posts),
        }
    }
}

/// Result of a listing: the bare sequence, or one page with metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum PostListing {
    All(Vec<Post>),
    Paged(Page<Post>),
}

/// Case-insensitive substring search. A post matches when either supplied
/// criterion matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    title: Option<String>,
    content: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<&str>, content: Option<&str>) -> Self {
        Self {
            title: non_empty(title).map(str::to_lowercase),
            content: non_empty(content).map(str::to_lowercase),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.is_empty() {
            return true;
        }

        let title_hit = self
            .title
            .as_deref()
            .is_some_and(|q| post.title.to_lowercase().contains(q));
        let content_hit = self
            .content
            .as_deref()
            .is_some_and(|q| post.content.to_lowercase().contains(q));

        title_hit || content_hit
    }

    pub fn filter(&self, posts: Vec<Post>) -> Vec<Post> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post(id: u64, title: &str, content: &str) -> Post {
        Post::new(id, NewPost::new(title, content))
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    fn numbered(count: u64) -> Vec<Post> {
        (1..=count)
            .map(|i| post(i, &format!("Post {}", i), "body"))
            .collect()
    }

    #[test]
    fn test_sort_title_is_case_insensitive() {
        let mut posts = vec![post(1, "Banana", "x"), post(2, "apple", "y")];

        sort_posts(&mut posts, SortField::Title, SortDirection::Asc);
        assert_eq!(titles(&posts), vec!["apple", "Banana"]);

        sort_posts(&mut posts, SortField::Title, SortDirection::Desc);
        assert_eq!(titles(&posts), vec!["Banana", "apple"]);
    }

    #[test]
    fn test_sort_ties_keep_insertion_order() {
        let original = vec![
            post(1, "b", "same"),
            post(2, "a", "SAME"),
            post(3, "c", "Same"),
        ];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut posts = original.clone();
            sort_posts(&mut posts, SortField::Content, direction);
            let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_sort_and_direction() {
        let err = ListQuery::parse(Some("author"), None, None, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuery(_)));

        let err = ListQuery::parse(None, Some("sideways"), None, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuery(_)));
    }

    #[test]
    fn test_parse_treats_empty_sort_as_absent() {
        let query = ListQuery::parse(Some(""), Some(""), None, None).unwrap();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_parse_pagination_defaults_and_errors() {
        let query = ListQuery::parse(None, None, Some("2"), None).unwrap();
        assert_eq!(
            query.page,
            Some(PageRequest {
                page: 2,
                per_page: DEFAULT_PER_PAGE
            })
        );

        let query = ListQuery::parse(None, None, None, Some("5")).unwrap();
        assert_eq!(
            query.page,
            Some(PageRequest {
                page: DEFAULT_PAGE,
                per_page: 5
            })
        );

        for (page, per_page) in [
            (Some("0"), None),
            (Some("-1"), None),
            (Some("abc"), None),
            (None, Some("0")),
            (Some("1"), Some("ten")),
            (Some(""), None),
        ] {
            let err = ListQuery::parse(None, None, page, per_page).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidQuery(_)),
                "page={:?} per_page={:?}",
                page,
                per_page
            );
        }
    }

    #[test]
    fn test_paginate_middle_and_last_page() {
        let request = PageRequest {
            page: 2,
            per_page: 10,
        };
        let page = request.paginate(numbered(25));
        let ids: Vec<u64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.has_next);
        assert!(page.meta.has_prev);

        let request = PageRequest {
            page: 3,
            per_page: 10,
        };
        let page = request.paginate(numbered(25));
        assert_eq!(page.items.len(), 5);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let request = PageRequest {
            page: 9,
            per_page: 10,
        };
        let page = request.paginate(numbered(25));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_pages, 3);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = PageRequest {
            page: 1,
            per_page: 10,
        }
        .paginate(Vec::<Post>::new());
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_next);
        assert!(!page.meta.has_prev);
    }

    #[test]
    fn test_apply_sorts_before_paginating() {
        let posts = vec![
            post(1, "d", "x"),
            post(2, "b", "x"),
            post(3, "a", "x"),
            post(4, "c", "x"),
        ];
        let query = ListQuery::parse(Some("title"), None, Some("1"), Some("2")).unwrap();

        match query.apply(posts) {
            PostListing::Paged(page) => {
                assert_eq!(titles(&page.items), vec!["a", "b"]);
                assert_eq!(page.meta.total, 4);
            }
            other => panic!("expected a page, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_without_params_keeps_natural_order() {
        let posts = vec![post(1, "b", "x"), post(2, "a", "x")];
        assert_eq!(
            ListQuery::default().apply(posts.clone()),
            PostListing::All(posts)
        );
    }

    #[test]
    fn test_search_title_only() {
        let posts = vec![
            post(1, "First post", "hello"),
            post(2, "Second post", "the first of many"),
        ];
        let found = SearchQuery::new(Some("FIRST"), None).filter(posts);
        assert_eq!(titles(&found), vec!["First post"]);
    }

    #[test]
    fn test_search_is_or_across_criteria_without_duplicates() {
        let posts = vec![
            post(1, "Rust tips", "borrowing"),
            post(2, "Cooking", "rust removal from pans"),
            post(3, "Gardening", "soil"),
            post(4, "Rust again", "more rust"),
        ];
        let found = SearchQuery::new(Some("rust"), Some("RUST")).filter(posts);
        let ids: Vec<u64> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_search_without_criteria_returns_everything() {
        let posts = vec![post(1, "a", "b"), post(2, "c", "d")];
        let query = SearchQuery::new(Some(""), None);
        assert!(query.is_empty());
        assert_eq!(query.filter(posts.clone()), posts);
    }
}
