//! Text normalization for category comparison.
//!
//! Comparisons always compose trim-then-lowercase, applied to both the query
//! and each stored category.

/// Strip leading and trailing whitespace (space, tab, CR, LF).
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Map ASCII letters to lowercase; other characters pass through.
pub fn lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// The comparison form: trim, then lowercase.
pub fn normalize(s: &str) -> String {
    lowercase(trim(s))
}
