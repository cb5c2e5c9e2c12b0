use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_url_string;
use crate::{
    services::{matcher::Searchable, suggest::CourseSuggestion},
    utils::text::same_label,
};

/// Blog category attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    pub color: Option<String>,
}

/// A blog post as stored in `posts.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Post {
    pub id: i64,

    #[validate(length(min = 1, max = 200))]
    pub slug: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub excerpt: String,

    /// HTML body. Sanitized before it leaves the server.
    #[validate(length(min = 1, max = 200000))]
    pub content: String,

    #[validate(nested)]
    pub category: PostCategory,

    #[serde(default)]
    pub tags: Vec<String>,

    pub published_at: chrono::DateTime<chrono::Utc>,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: u32,

    #[serde(default)]
    pub views: u64,

    #[validate(length(max = 500), custom(function = validate_url_string))]
    pub cover_img: Option<String>,
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn in_category(&self, category: &str) -> bool {
        same_label(&self.category.slug, category)
            || same_label(&self.category.name, category)
            || self.tags.iter().any(|t| same_label(t, category))
    }

    fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        Some(self.published_at)
    }

    fn popularity(&self) -> u64 {
        self.views
    }

    fn reading_time(&self) -> u32 {
        self.reading_time
    }
}

/// Pagination metadata returned with listings.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index range of the current page inside the full result set.
    pub fn window(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.limit).min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        start..end
    }
}

/// Paginated list of posts.
#[derive(Debug, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

/// Single post with sanitized content and related courses.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub suggested_courses: Vec<CourseSuggestion>,
}

/// Blog category with the number of posts filed under it.
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub post_count: usize,
}
