//! Post collection handlers.

use actix_web::{HttpResponse, web};
use serde::de::DeserializeOwned;
use serde_json::Value;

use quill_core::DomainError;
use quill_core::domain::{ListQuery, PostDraft, PostListing, PostPatch, SearchQuery};
use quill_shared::MessageResponse;
use quill_shared::dto::{
    CreatePostRequest, ListPostsParams, PaginatedPosts, PaginationInfo, SearchPostsParams,
    UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListPostsParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let query = ListQuery::parse(
        params.sort.as_deref(),
        params.direction.as_deref(),
        params.page.as_deref(),
        params.per_page.as_deref(),
    )
    .inspect_err(|e| tracing::warn!(error = %e, "Rejected list query"))?;

    let response = match state.posts.list(query).await? {
        PostListing::All(posts) => HttpResponse::Ok().json(posts),
        PostListing::Paged(page) => HttpResponse::Ok().json(PaginatedPosts {
            posts: page.items,
            pagination: PaginationInfo {
                total: page.meta.total,
                page: page.meta.page,
                per_page: page.meta.per_page,
                total_pages: page.meta.total_pages,
                has_next: page.meta.has_next,
                has_prev: page.meta.has_prev,
            },
        }),
    };

    Ok(response)
}

/// GET /api/posts/search
pub async fn search_posts(
    state: web::Data<AppState>,
    pairs: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let params = SearchPostsParams::from_pairs(pairs.into_inner());
    let query = SearchQuery::new(params.title.as_deref(), params.content.as_deref());
    let posts = state.posts.search(query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, id: web::Path<u64>) -> AppResult<HttpResponse> {
    let post = state.posts.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    // Anything but a non-empty object counts as "no data".
    let req: CreatePostRequest = match parse_body(&body)? {
        Some(Value::Object(map)) if !map.is_empty() => from_value(Value::Object(map))?,
        _ => return Err(DomainError::MissingField { field: "payload" }.into()),
    };

    let draft = PostDraft {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags,
        category: req.category,
    };

    let post = state
        .posts
        .create(draft)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected new post"))?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    id: web::Path<u64>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    // A missing or non-object body changes nothing.
    let req: UpdatePostRequest = match parse_body(&body)? {
        Some(value @ Value::Object(_)) => from_value(value)?,
        _ => UpdatePostRequest::default(),
    };

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };

    let post = state.posts.update(id.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let deleted = state.posts.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::post_deleted(deleted)))
}

/// Parse a raw JSON body. `None` for an empty body.
fn parse_body(body: &[u8]) -> AppResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON payload: {}", e)))
}

fn from_value<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid payload: {}", e)))
}
