// Meaningful word sets and plain Jaccard similarity.

use std::collections::HashSet;

/// Function words ignored when comparing titles.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "be", "been",
    "will", "would", "could", "should", "has", "have", "had", "do", "does",
    "did", "this", "that", "these", "those", "what", "which", "who", "when",
    "where", "why", "how", "their", "there", "than", "then",
];

/// Lowercased word-character runs longer than two characters, minus stop words.
pub fn meaningful_words(title: &str) -> HashSet<String> {
    title
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// |A ∩ B| / |A ∪ B|, or 0.0 when both sets are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
