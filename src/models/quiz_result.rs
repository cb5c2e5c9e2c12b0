// src/models/quiz_result.rs

use serde::Serialize;

use super::{category::Category, course::CourseSummary};

/// Normalized affinity for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub category: Category,

    /// Always within 0..=100.
    pub percentage: u8,
}

/// Label and message describing the dominant category.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub category: Category,
    pub label: &'static str,
    pub message: &'static str,
}

impl From<Category> for Profile {
    fn from(category: Category) -> Self {
        Self {
            category,
            label: category.label(),
            message: category.profile_message(),
        }
    }
}

/// Response body for a submitted quiz.
#[derive(Debug, Serialize)]
pub struct QuizOutcome {
    /// All categories ranked for display.
    pub results: Vec<ScoreResult>,
    pub dominant: ScoreResult,
    pub profile: Profile,
    pub recommended_courses: Vec<CourseSummary>,
}
