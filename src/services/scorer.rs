// src/services/scorer.rs

//! Vocational quiz scoring.

use crate::models::{
    category::Category,
    question::{Weight, Weights},
    quiz_result::ScoreResult,
};

/// Sums the weights of every selected answer and normalizes each category
/// against the highest total.
///
/// Returns exactly one result per category in the fixed category order.
/// Callers are expected to pass one selection per question; the function
/// itself accepts any number.
pub fn score(selections: &[Weights]) -> Vec<ScoreResult> {
    let mut totals: [Weight; Category::ALL.len()] = [0; Category::ALL.len()];

    for weights in selections {
        for &(category, weight) in weights.iter() {
            totals[category.index()] += weight;
        }
    }

    // All-zero totals cannot happen with the bundled questionnaire.
    let max = totals.iter().copied().max().filter(|&m| m > 0).unwrap_or(1);

    Category::ALL
        .iter()
        .map(|&category| {
            let total = totals[category.index()];
            let percentage = (f64::from(total) / f64::from(max) * 100.0).round() as u8;
            ScoreResult {
                category,
                percentage,
            }
        })
        .collect()
}

/// Orders results for display: highest percentage first, ties keep the
/// fixed category order.
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    results.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.category.index().cmp(&b.category.index()))
    });
    results
}

/// First category after ranking.
pub fn dominant(results: &[ScoreResult]) -> Option<ScoreResult> {
    results.iter().copied().min_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.category.index().cmp(&b.category.index()))
    })
}
