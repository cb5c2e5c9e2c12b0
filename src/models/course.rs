// src/models/course.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{category::Category, validate_url_string};
use crate::{services::matcher::Searchable, utils::text::same_label};

/// Whether a course is currently offered. Inactive courses never show up
/// in search results or recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
}

/// Keywords used to suggest this course next to blog posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseKeywords {
    /// Strong signals, worth 3 points per occurrence.
    #[serde(default)]
    pub primary: Vec<String>,

    /// Weak signals, worth 1 point per occurrence.
    #[serde(default)]
    pub secondary: Vec<String>,

    /// Multiplier applied to the summed points.
    #[serde(default = "default_keyword_weight")]
    pub weight: f64,
}

impl Default for CourseKeywords {
    fn default() -> Self {
        Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            weight: default_keyword_weight(),
        }
    }
}

fn default_keyword_weight() -> f64 {
    1.0
}

/// A course record as stored in `courses.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Course {
    #[validate(length(min = 1, max = 50))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 500))]
    pub short_description: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub long_description: String,

    /// Catalog category slug (e.g. "tecnologia", "design").
    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Quiz categories this course fits.
    #[serde(default)]
    pub areas: Vec<Category>,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub status: CourseStatus,

    /// Enrollment count, used by the `popular` sort.
    #[serde(default)]
    pub popularity: u64,

    #[validate(length(max = 500), custom(function = validate_url_string))]
    pub cover_img: Option<String>,

    #[serde(default, skip_serializing)]
    pub keywords: CourseKeywords,
}

impl Course {
    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }
}

impl Searchable for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.short_description
    }

    fn body(&self) -> &str {
        &self.long_description
    }

    fn is_listed(&self) -> bool {
        self.is_active()
    }

    fn in_category(&self, category: &str) -> bool {
        same_label(&self.category, category) || self.tags.iter().any(|t| same_label(t, category))
    }

    fn popularity(&self) -> u64 {
        self.popularity
    }
}

/// Compact DTO used wherever a course is referenced from another resource.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub duration: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            slug: course.slug.clone(),
            title: course.title.clone(),
            short_description: course.short_description.clone(),
            duration: course.duration.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{data::catalog::Catalog, services::matcher::match_items};

    #[test]
    fn category_filter_folds_non_ascii_case() {
        let catalog = Catalog::bundled().unwrap();

        let lower = match_items(None, Some("gestão"), &catalog.courses);
        let upper = match_items(None, Some("GESTÃO"), &catalog.courses);

        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].slug, "administracao");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].slug, lower[0].slug);
    }
}
