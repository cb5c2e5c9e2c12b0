// src/services/recommend.rs

use crate::models::{category::Category, course::Course};

/// Active courses whose affinity areas include `category`, in catalog order.
pub fn courses_for_category(category: Category, courses: &[Course], limit: usize) -> Vec<&Course> {
    courses
        .iter()
        .filter(|c| c.is_active() && c.areas.contains(&category))
        .take(limit)
        .collect()
}
