// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{blog, course, health, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (quiz, courses, blog).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (catalog and config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/questions", get(quiz::list_questions))
        .route("/submit", post(quiz::submit_quiz));

    let course_routes = Router::new()
        .route("/", get(course::list_courses))
        .route("/{slug}", get(course::get_course));

    let post_routes = Router::new()
        .route("/", get(blog::list_posts))
        .route("/{slug}", get(blog::get_post));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/categories", get(blog::list_categories))
        .nest("/api/quiz", quiz_routes)
        .nest("/api/courses", course_routes)
        .nest("/api/posts", post_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
