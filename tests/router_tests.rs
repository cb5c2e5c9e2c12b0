// tests/router_tests.rs

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use catalog_api::{config::Config, create_router, data::catalog::Catalog, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> axum::Router {
    let catalog = Catalog::bundled().expect("Bundled catalog must load");
    create_router(AppState::new(catalog, Config::default()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn whitespace_query_returns_every_active_course() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/courses?q=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn unknown_sort_key_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/posts?sort=random")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_query_returns_json_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/posts?page=-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/posts?limit=5000&page=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["pagination"]["limit"], 100);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["posts"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn submit_with_wrong_body_shape_returns_json_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"answers": "nope"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_returns_json_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quiz/submit")
                .body(Body::from(r#"{"answers": [0]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}
