use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Lowercases, strips diacritics, turns punctuation into spaces and
/// collapses whitespace, so "Programação  Web!" becomes "programacao web".
pub fn normalize_text(input: &str) -> String {
    let folded: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let spaced = NON_WORD.replace_all(&folded, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Case-insensitive label equality that also folds non-ASCII letters,
/// so "GESTÃO" equals "gestão".
pub fn same_label(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
