// src/data/catalog.rs

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        course::Course,
        post::{CategorySummary, Post},
    },
};

const BUNDLED_COURSES: &str = include_str!("../../data/courses.json");
const BUNDLED_POSTS: &str = include_str!("../../data/posts.json");

/// Courses and blog posts, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub posts: Vec<Post>,
}

impl Catalog {
    /// Loads from `CATALOG_DIR` when configured, otherwise the bundled data.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        match &config.catalog_dir {
            Some(dir) => Self::from_dir(Path::new(dir)),
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_COURSES, BUNDLED_POSTS)
    }

    /// Reads `courses.json` and `posts.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, AppError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|e| {
                AppError::InternalServerError(format!("Failed to read {}: {}", path.display(), e))
            })
        };

        Self::from_json(&read("courses.json")?, &read("posts.json")?)
    }

    pub fn from_json(courses: &str, posts: &str) -> Result<Self, AppError> {
        let courses: Vec<Course> = serde_json::from_str(courses).map_err(|e| {
            AppError::InternalServerError(format!("Invalid courses.json: {}", e))
        })?;
        let posts: Vec<Post> = serde_json::from_str(posts)
            .map_err(|e| AppError::InternalServerError(format!("Invalid posts.json: {}", e)))?;

        let catalog = Self { courses, posts };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut course_slugs = HashSet::new();
        for course in &self.courses {
            course.validate().map_err(|e| {
                AppError::InternalServerError(format!("Invalid course '{}': {}", course.id, e))
            })?;
            if !course_slugs.insert(course.slug.as_str()) {
                return Err(AppError::InternalServerError(format!(
                    "Duplicate course slug '{}'",
                    course.slug
                )));
            }
        }

        let mut post_slugs = HashSet::new();
        for post in &self.posts {
            post.validate().map_err(|e| {
                AppError::InternalServerError(format!("Invalid post '{}': {}", post.slug, e))
            })?;
            if !post_slugs.insert(post.slug.as_str()) {
                return Err(AppError::InternalServerError(format!(
                    "Duplicate post slug '{}'",
                    post.slug
                )));
            }
        }

        Ok(())
    }

    /// Active course by slug. Inactive courses are treated as missing.
    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.slug == slug && c.is_active())
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Blog categories sorted by name, with post counts.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut by_slug: BTreeMap<&str, CategorySummary> = BTreeMap::new();
        for post in &self.posts {
            by_slug
                .entry(post.category.slug.as_str())
                .or_insert_with(|| CategorySummary {
                    name: post.category.name.clone(),
                    slug: post.category.slug.clone(),
                    color: post.category.color.clone(),
                    post_count: 0,
                })
                .post_count += 1;
        }

        let mut categories: Vec<CategorySummary> = by_slug.into_values().collect();
        categories.sort_by_cached_key(|c| c.name.to_lowercase());
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.courses.is_empty());
        assert!(!catalog.posts.is_empty());
        assert!(catalog.courses.iter().any(|c| !c.is_active()));
    }

    #[test]
    fn inactive_course_is_not_found_by_slug() {
        let catalog = Catalog::bundled().unwrap();
        let inactive = catalog.courses.iter().find(|c| !c.is_active()).unwrap();
        assert!(catalog.course_by_slug(&inactive.slug).is_none());
    }

    #[test]
    fn categories_count_posts() {
        let catalog = Catalog::bundled().unwrap();
        let categories = catalog.categories();
        let total: usize = categories.iter().map(|c| c.post_count).sum();
        assert_eq!(total, catalog.posts.len());

        let names: Vec<String> = categories.iter().map(|c| c.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn rejects_invalid_cover_url() {
        let courses = r#"[{
            "id": "x", "slug": "x", "title": "X", "short_description": "",
            "category": "design", "cover_img": "not a url"
        }]"#;
        let err = Catalog::from_json(courses, "[]").unwrap_err();
        assert!(matches!(err, AppError::InternalServerError(_)));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let courses = r#"[
            {"id": "a", "slug": "dup", "title": "A", "short_description": "", "category": "design", "cover_img": null},
            {"id": "b", "slug": "dup", "title": "B", "short_description": "", "category": "design", "cover_img": null}
        ]"#;
        assert!(Catalog::from_json(courses, "[]").is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{", "[]").is_err());
    }
}
