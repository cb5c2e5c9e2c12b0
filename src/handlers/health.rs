use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::data::catalog::Catalog;

/// Liveness probe reporting how much of the catalog is loaded.
pub async fn health(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "courses": catalog.courses.len(),
        "posts": catalog.posts.len(),
    }))
}
