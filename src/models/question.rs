// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::Category;

/// Weight an answer adds to one category. Observed range is 1..=3.
pub type Weight = u32;

/// Category weights carried by a single answer.
/// Categories that are not listed contribute nothing.
pub type Weights = &'static [(Category, Weight)];

/// One selectable option of a quiz question.
#[derive(Debug, Clone, Copy)]
pub struct Answer {
    pub text: &'static str,
    pub weights: Weights,
}

/// A quiz question. The questionnaire itself lives in `crate::data::questions`.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u32,

    /// Grouping label only, never used for scoring.
    pub section: &'static str,

    pub prompt: &'static str,

    /// Ordered options; clients answer with an index into this slice.
    pub answers: &'static [Answer],
}

/// DTO for sending a question to the client (weights stay on the server).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: u32,
    pub section: &'static str,
    pub prompt: &'static str,
    pub answers: Vec<&'static str>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            section: question.section,
            prompt: question.prompt,
            answers: question.answers.iter().map(|a| a.text).collect(),
        }
    }
}

/// DTO for submitting a finished quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    /// Selected answer index for each question, in question order.
    #[validate(length(min = 1, message = "At least one answer is required"))]
    pub answers: Vec<usize>,
}
