//! Case-insensitive keyword matching shared by the extractors and scorers.
//!
//! Hits are counted as distinct keywords present, not total occurrences:
//! set semantics keep every downstream score monotone as text grows.

/// Keywords from `keywords` that occur in `text` as a case-insensitive
/// substring, in input order. Callers pass the registry's (lower-cased)
/// keyword lists.
pub fn matched_keywords<'a>(text: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| !kw.is_empty() && lower.contains(kw.as_str()))
        .map(String::as_str)
        .collect()
}

/// Number of distinct keywords present in `text`.
pub fn count_hits(text: &str, keywords: &[String]) -> usize {
    matched_keywords(text, keywords).len()
}
