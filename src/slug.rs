//! URL-safe slug derivation for titles and category names.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Strip accents via NFD decomposition and lowercase: "Série A" -> "serie a"
pub fn fold_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Generate a URL-safe slug from a human-readable string.
///
/// Accents are stripped via NFD decomposition, the result is lowercased,
/// runs of anything outside `[a-z0-9]` collapse to a single hyphen, and
/// edge hyphens are trimmed.
///
/// - "Georgia vs Bulgaria" -> "georgia-vs-bulgaria"
/// - "Atlético Madrid" -> "atletico-madrid"
#[must_use]
pub fn slugify(text: &str) -> String {
    let folded = fold_accents(text);

    NON_ALNUM
        .replace_all(folded.trim(), "-")
        .trim_matches('-')
        .to_string()
}
