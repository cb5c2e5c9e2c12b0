// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    config::RECOMMENDED_COURSE_LIMIT,
    data::{catalog::Catalog, questions::QUESTIONS},
    error::AppError,
    extract::AppJson,
    models::{
        course::CourseSummary,
        question::{PublicQuestion, Question, SubmitQuizRequest, Weights},
        quiz_result::{Profile, QuizOutcome},
    },
    services::{recommend, scorer},
};

/// Returns the questionnaire without answer weights.
pub async fn list_questions() -> impl IntoResponse {
    let questions: Vec<PublicQuestion> = QUESTIONS.iter().map(PublicQuestion::from).collect();
    Json(questions)
}

/// Scores a finished quiz.
///
/// * Expects exactly one answer index per question, in question order.
/// * Ranks every category and picks the dominant one.
/// * Recommends active courses matching the dominant category.
pub async fn submit_quiz(
    State(catalog): State<Arc<Catalog>>,
    AppJson(req): AppJson<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let selections = resolve_selections(QUESTIONS, &req.answers)?;

    let scores = scorer::score(&selections);
    let dominant = scorer::dominant(&scores)
        .ok_or_else(|| AppError::InternalServerError("Scoring produced no results".to_string()))?;
    let results = scorer::rank(scores);

    let recommended_courses: Vec<CourseSummary> =
        recommend::courses_for_category(dominant.category, &catalog.courses, RECOMMENDED_COURSE_LIMIT)
            .into_iter()
            .map(CourseSummary::from)
            .collect();

    tracing::info!(
        dominant = %dominant.category,
        recommended = recommended_courses.len(),
        "quiz scored"
    );

    Ok(Json(QuizOutcome {
        results,
        dominant,
        profile: Profile::from(dominant.category),
        recommended_courses,
    }))
}

/// Maps answer indexes to the weights they select.
/// Rejects a malformed answer set: wrong count or an index out of range.
fn resolve_selections(questions: &[Question], answers: &[usize]) -> Result<Vec<Weights>, AppError> {
    if answers.len() != questions.len() {
        return Err(AppError::BadRequest(format!(
            "Expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    questions
        .iter()
        .zip(answers)
        .map(|(question, &index)| {
            question
                .answers
                .get(index)
                .map(|answer| answer.weights)
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Answer {} is out of range for question {}",
                        index, question.id
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_cardinality() {
        let err = resolve_selections(QUESTIONS, &[0, 1]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut answers = vec![0; QUESTIONS.len()];
        answers[3] = 9;
        let err = resolve_selections(QUESTIONS, &answers).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("question 4")));
    }

    #[test]
    fn resolves_weights_in_question_order() {
        let answers = vec![1; QUESTIONS.len()];
        let selections = resolve_selections(QUESTIONS, &answers).unwrap();
        assert_eq!(selections.len(), QUESTIONS.len());
        assert_eq!(selections[0], QUESTIONS[0].answers[1].weights);
    }
}
