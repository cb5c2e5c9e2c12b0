use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SUGGESTION_LIMIT},
    data::catalog::Catalog,
    error::AppError,
    extract::AppQuery,
    models::post::{Pagination, PostDetail, PostPage},
    services::{
        matcher::{self, SortKey},
        suggest,
    },
    utils::html::clean_html,
};

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    /// Search keyword matched against title, excerpt and content.
    pub q: Option<String>,

    /// Category slug or name, or a tag.
    pub category: Option<String>,

    /// Sort order (default: 'newest').
    pub sort: Option<SortKey>,

    /// 1-based page number (default: 1).
    pub page: Option<usize>,

    /// Number of items to return (default: 10, max: 100).
    pub limit: Option<usize>,
}

/// List posts (Recent first unless another sort is requested).
/// Supports keyword search, category filter and page-based pagination.
pub async fn list_posts(
    State(catalog): State<Arc<Catalog>>,
    AppQuery(params): AppQuery<PostListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let found = matcher::search(
        params.q.as_deref(),
        params.category.as_deref(),
        Some(params.sort.unwrap_or(SortKey::Newest)),
        &catalog.posts,
    );

    let pagination = Pagination::new(page, limit, found.len());
    let posts = found[pagination.window()]
        .iter()
        .map(|post| (*post).clone())
        .collect();

    Ok(Json(PostPage { posts, pagination }))
}

/// Get a single post by slug, with sanitized content and course suggestions.
pub async fn get_post(
    State(catalog): State<Arc<Catalog>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = catalog
        .post_by_slug(&slug)
        .ok_or(AppError::NotFound("Post not found".to_string()))?;

    let suggested_courses = suggest::suggest_courses(post, &catalog.courses, SUGGESTION_LIMIT);

    let mut post = post.clone();
    post.content = clean_html(&post.content);

    Ok(Json(PostDetail {
        post,
        suggested_courses,
    }))
}

/// Lists blog categories with their post counts.
pub async fn list_categories(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    Json(catalog.categories())
}
