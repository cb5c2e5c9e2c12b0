// src/services/matcher.rs

//! Search and category filtering over the in-memory catalog.

use serde::Deserialize;

/// Anything the catalog can search: courses and blog posts.
pub trait Searchable {
    fn title(&self) -> &str;

    /// Short description or excerpt.
    fn summary(&self) -> &str;

    /// Full description or post content.
    fn body(&self) -> &str;

    fn in_category(&self, category: &str) -> bool;

    /// Hidden items (e.g. inactive courses) never match.
    fn is_listed(&self) -> bool {
        true
    }

    fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        None
    }

    fn popularity(&self) -> u64 {
        0
    }

    fn reading_time(&self) -> u32 {
        0
    }
}

/// Sort keys a caller may request. Without one, input order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Publish date, most recent first. Undated items go last.
    Newest,
    /// Popularity, highest first.
    Popular,
    /// Reading time, shortest first.
    ReadingTime,
    /// Title, alphabetical (case-insensitive).
    Title,
}

/// Returns the listed items matching the optional category and query,
/// in their original order.
///
/// The query is trimmed; an empty or whitespace-only query filters nothing.
/// Matching is a case-insensitive substring test against title, summary and body.
pub fn match_items<'a, T: Searchable>(
    query: Option<&str>,
    category: Option<&str>,
    items: &'a [T],
) -> Vec<&'a T> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    items
        .iter()
        .filter(|item| item.is_listed())
        .filter(|item| category.is_none_or(|c| item.in_category(c)))
        .filter(|item| needle.as_deref().is_none_or(|n| matches_text(*item, n)))
        .collect()
}

/// Stable sort by a single key; ties keep their relative order.
pub fn sort_items<T: Searchable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.published_at().cmp(&a.published_at())),
        SortKey::Popular => items.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
        SortKey::ReadingTime => items.sort_by_key(|item| item.reading_time()),
        SortKey::Title => items.sort_by_cached_key(|item| item.title().to_lowercase()),
    }
}

/// `match_items` followed by an optional sort.
pub fn search<'a, T: Searchable>(
    query: Option<&str>,
    category: Option<&str>,
    sort: Option<SortKey>,
    items: &'a [T],
) -> Vec<&'a T> {
    let mut found = match_items(query, category, items);
    if let Some(key) = sort {
        sort_items(&mut found, key);
    }
    found
}

fn matches_text<T: Searchable>(item: &T, needle: &str) -> bool {
    [item.title(), item.summary(), item.body()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        title: &'static str,
        summary: &'static str,
        body: &'static str,
        category: &'static str,
        active: bool,
        popularity: u64,
        reading_time: u32,
        published_at: Option<chrono::DateTime<chrono::Utc>>,
    }

    impl Item {
        fn new(title: &'static str, category: &'static str, active: bool) -> Self {
            Self {
                title,
                summary: "",
                body: "",
                category,
                active,
                popularity: 0,
                reading_time: 0,
                published_at: None,
            }
        }
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            self.title
        }
        fn summary(&self) -> &str {
            self.summary
        }
        fn body(&self) -> &str {
            self.body
        }
        fn in_category(&self, category: &str) -> bool {
            self.category.eq_ignore_ascii_case(category)
        }
        fn is_listed(&self) -> bool {
            self.active
        }
        fn popularity(&self) -> u64 {
            self.popularity
        }
        fn reading_time(&self) -> u32 {
            self.reading_time
        }
        fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
            self.published_at
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("SketchUp Enscape", "design", true),
            Item::new("Python Basics", "tech", false),
        ]
    }

    fn titles<T: Searchable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.title().to_string()).collect()
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let items = catalog();
        let found = match_items(Some("sketchup"), None, &items);
        assert_eq!(titles(&found), vec!["SketchUp Enscape"]);
    }

    #[test]
    fn inactive_items_never_match() {
        let items = catalog();
        assert!(match_items(None, Some("tech"), &items).is_empty());
        assert!(match_items(Some("python"), None, &items).is_empty());
    }

    #[test]
    fn no_filters_returns_listed_items_in_order() {
        let mut items = catalog();
        items.push(Item::new("AutoCAD", "design", true));
        let found = match_items(None, None, &items);
        assert_eq!(titles(&found), vec!["SketchUp Enscape", "AutoCAD"]);
    }

    #[test]
    fn whitespace_query_is_ignored() {
        let items = catalog();
        assert_eq!(match_items(Some("   "), None, &items).len(), 1);
        assert_eq!(match_items(Some("  sketch "), None, &items).len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        let items = catalog();
        assert!(match_items(Some("zzzznomatch"), None, &items).is_empty());
        assert!(match_items(None, Some("unknown"), &items).is_empty());
    }

    #[test]
    fn query_searches_summary_and_body() {
        let mut a = Item::new("Curso A", "design", true);
        a.summary = "Renderização com V-Ray";
        let mut b = Item::new("Curso B", "design", true);
        b.body = "Aprenda EXCEL avançado";
        let items = vec![a, b];

        assert_eq!(titles(&match_items(Some("v-ray"), None, &items)), vec!["Curso A"]);
        assert_eq!(titles(&match_items(Some("excel"), None, &items)), vec!["Curso B"]);
    }

    #[test]
    fn output_is_exactly_the_items_satisfying_every_predicate() {
        let items = vec![
            Item::new("Design Gráfico", "design", true),
            Item::new("Design de Interiores", "design", false),
            Item::new("Marketing e Design", "marketing", true),
            Item::new("Programação", "tech", true),
        ];
        let query = "design";
        let category = "design";

        let found = match_items(Some(query), Some(category), &items);
        let expected: Vec<&Item> = items
            .iter()
            .filter(|i| i.active && i.in_category(category) && i.title.to_lowercase().contains(query))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn popular_sort_is_stable() {
        let mut a = Item::new("A", "x", true);
        a.popularity = 5;
        let mut b = Item::new("B", "x", true);
        b.popularity = 9;
        let mut c = Item::new("C", "x", true);
        c.popularity = 5;
        let items = vec![a, b, c];

        let found = search(None, None, Some(SortKey::Popular), &items);
        assert_eq!(titles(&found), vec!["B", "A", "C"]);
    }

    #[test]
    fn title_sort_ignores_case() {
        let items = vec![
            Item::new("banana", "x", true),
            Item::new("Abacaxi", "x", true),
            Item::new("cereja", "x", true),
        ];
        let found = search(None, None, Some(SortKey::Title), &items);
        assert_eq!(titles(&found), vec!["Abacaxi", "banana", "cereja"]);
    }

    #[test]
    fn reading_time_sort_is_ascending_and_stable() {
        let mut items = Vec::new();
        for (title, minutes) in [("A", 8), ("B", 3), ("C", 8), ("D", 5), ("E", 3)] {
            let mut item = Item::new(title, "x", true);
            item.reading_time = minutes;
            items.push(item);
        }

        let found = search(None, None, Some(SortKey::ReadingTime), &items);
        assert_eq!(titles(&found), vec!["B", "E", "D", "A", "C"]);
    }

    #[test]
    fn newest_sort_puts_undated_items_last() {
        let day = |d: u32| {
            chrono::NaiveDate::from_ymd_opt(2025, 1, d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .unwrap()
                .and_utc()
        };

        let mut items = Vec::new();
        for (title, date) in [
            ("undated-1", None),
            ("old", Some(day(2))),
            ("undated-2", None),
            ("new", Some(day(20))),
            ("same-day", Some(day(20))),
        ] {
            let mut item = Item::new(title, "x", true);
            item.published_at = date;
            items.push(item);
        }

        let found = search(None, None, Some(SortKey::Newest), &items);
        assert_eq!(
            titles(&found),
            vec!["new", "same-day", "old", "undated-1", "undated-2"]
        );
    }
}
