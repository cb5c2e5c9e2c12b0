// src/services/suggest.rs

//! Keyword-based course suggestions shown next to blog posts.

use serde::Serialize;

use crate::{
    models::{
        course::{Course, CourseKeywords, CourseSummary},
        post::Post,
    },
    utils::text::normalize_text,
};

const PRIMARY_POINTS: f64 = 3.0;
const SECONDARY_POINTS: f64 = 1.0;
const MIN_SCORE: f64 = 1.0;

/// A course suggested for a post, with the keywords that triggered it.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSuggestion {
    pub course: CourseSummary,
    pub score: f64,
    pub matched_keywords: Vec<String>,

    /// Set when nothing scored and the fallback course was used.
    pub generic: bool,
}

/// Ranks active courses by keyword relevance to `post`.
///
/// Returns at most `limit` suggestions, highest score first (ties keep
/// catalog order). When no course reaches the minimum score the first active
/// course is returned as a generic suggestion.
pub fn suggest_courses(post: &Post, courses: &[Course], limit: usize) -> Vec<CourseSuggestion> {
    let text = normalize_text(&post_text(post));

    let mut scored: Vec<CourseSuggestion> = courses
        .iter()
        .filter(|course| course.is_active())
        .filter_map(|course| {
            let score = relevance(&text, &course.keywords);
            (score >= MIN_SCORE).then(|| CourseSuggestion {
                course: CourseSummary::from(course),
                score,
                matched_keywords: matched_keywords(&text, &course.keywords),
                generic: false,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    if scored.is_empty() && limit > 0 {
        if let Some(fallback) = courses.iter().find(|c| c.is_active()) {
            tracing::debug!(post = %post.slug, course = %fallback.slug, "no keyword match, using generic suggestion");
            scored.push(CourseSuggestion {
                course: CourseSummary::from(fallback),
                score: 0.0,
                matched_keywords: Vec::new(),
                generic: true,
            });
        }
    }

    scored
}

fn post_text(post: &Post) -> String {
    [
        post.title.as_str(),
        post.content.as_str(),
        post.excerpt.as_str(),
        post.category.name.as_str(),
        &post.tags.join(" "),
    ]
    .join(" ")
}

/// Weighted keyword occurrences in already-normalized `text`.
fn relevance(text: &str, keywords: &CourseKeywords) -> f64 {
    let points = occurrences(text, &keywords.primary) as f64 * PRIMARY_POINTS
        + occurrences(text, &keywords.secondary) as f64 * SECONDARY_POINTS;
    points * keywords.weight
}

fn occurrences(text: &str, words: &[String]) -> usize {
    words
        .iter()
        .map(|w| normalize_text(w))
        .filter(|w| !w.is_empty())
        .map(|w| text.matches(w.as_str()).count())
        .sum()
}

/// Primary keywords found in `text`, or secondary ones if no primary matched.
fn matched_keywords(text: &str, keywords: &CourseKeywords) -> Vec<String> {
    let found = |words: &[String]| -> Vec<String> {
        words
            .iter()
            .filter(|w| {
                let needle = normalize_text(w);
                !needle.is_empty() && text.contains(&needle)
            })
            .cloned()
            .collect()
    };

    let primary = found(&keywords.primary);
    if primary.is_empty() {
        found(&keywords.secondary)
    } else {
        primary
    }
}
