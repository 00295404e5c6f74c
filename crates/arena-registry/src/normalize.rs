//! Identifier normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s._]+").expect("separator regex is valid"));
static PUNCTUATION_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[._]+").expect("punctuation regex is valid"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("hyphen regex is valid"));

/// Normalize a model identifier.
///
/// Lower-cases, trims, turns runs of whitespace, `.` and `_` into a single
/// `-`, then collapses repeated hyphens.
///
/// ```
/// use arena_registry::normalize_id;
///
/// assert_eq!(normalize_id("  Gemini 2.5_Pro "), "gemini-2-5-pro");
/// assert_eq!(normalize_id("gpt--5"), "gpt-5");
/// ```
pub fn normalize_id(input: &str) -> String {
    let lower = input.to_lowercase();
    let dashed = SEPARATOR_RUN.replace_all(lower.trim(), "-");
    HYPHEN_RUN.replace_all(&dashed, "-").into_owned()
}

/// Lower-case and fold only `.`/`_` runs into a single `-`.
///
/// Hyphens and whitespace, including surrounding whitespace, are left alone.
pub fn fold_punctuation(input: &str) -> String {
    let lower = input.to_lowercase();
    PUNCTUATION_RUN.replace_all(&lower, "-").into_owned()
}
