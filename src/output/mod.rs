// Output formatting: terminal display and JSON export of matches.

pub mod json;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..50]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_chars("Will Trump win?", 50), "Will Trump win?");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_chars("Bitcoin above $100k", 7), "Bitcoin...");
    }

    #[test]
    fn multibyte_boundaries_are_safe() {
        assert_eq!(truncate_chars("Élection présidentielle", 3), "Éle...");
    }
}
