// src/handlers/course.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    data::catalog::Catalog,
    error::AppError,
    extract::AppQuery,
    models::course::Course,
    services::matcher::{self, SortKey},
};

/// Query parameters for listing courses.
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortKey>,
}

/// Lists active courses, optionally filtered by category and search keyword.
pub async fn list_courses(
    State(catalog): State<Arc<Catalog>>,
    AppQuery(params): AppQuery<CourseListParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses: Vec<&Course> = matcher::search(
        params.q.as_deref(),
        params.category.as_deref(),
        params.sort,
        &catalog.courses,
    );

    tracing::debug!(q = ?params.q, category = ?params.category, found = courses.len(), "course search");

    Ok(Json(courses.into_iter().cloned().collect::<Vec<Course>>()))
}

/// Retrieves a single active course by slug.
pub async fn get_course(
    State(catalog): State<Arc<Catalog>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course = catalog
        .course_by_slug(&slug)
        .cloned()
        .ok_or(AppError::NotFound("Course not found".to_string()))?;

    Ok(Json(course))
}
