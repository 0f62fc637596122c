// Entity extraction: proper nouns, person names and "A vs B" participants.
//
// Person names are the strongest single signal that two titles are about
// different events: "Will Yair Golan be the next PM?" is not the same market
// as "Who will be the next PM?", however many words they share.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Capitalized modal verbs that start questions mid-title ("..., Will X").
const MODAL_WORDS: &[&str] = &["will", "would", "could", "should", "can", "may", "might"];

/// Capitalized words that are not people: titles, places, organizations,
/// event names and calendar words.
pub const NON_PERSON_WORDS: &[&str] = &[
    // Titles and positions
    "president", "prime", "minister", "senator", "governor", "mayor",
    "secretary", "director", "chairman", "leader", "chief", "king", "queen",
    // Countries
    "america", "usa", "china", "russia", "israel", "iran", "ukraine",
    "taiwan", "india", "japan", "korea", "france", "germany", "italy",
    "spain", "brazil", "mexico", "canada", "australia", "britain", "england",
    "netherlands",
    // Places and institutions
    "california", "texas", "florida", "york", "washington", "chicago",
    "mars", "earth", "house", "senate", "congress", "court",
    // Organizations
    "democratic", "republican", "gop", "nato", "olympics",
    // Events
    "super", "bowl", "world", "cup", "final", "championship",
    // Calendar
    "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

static PARTICIPANTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Za-z]+(?:\s+[A-Za-z]+)*)\s+(?:vs?\.?|versus)\s+([A-Za-z]+(?:\s+[A-Za-z]+)*)")
        .expect("valid participants pattern")
});

static CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+").expect("valid capitalized pattern"));

/// Lowercased capitalized words, skipping the first word of the title and
/// modal verbs. Punctuation is stripped from each word before the check.
pub fn proper_nouns(title: &str) -> HashSet<String> {
    title
        .split_whitespace()
        .skip(1)
        .map(strip_punctuation)
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .map(|word| word.to_lowercase())
        .filter(|word| !MODAL_WORDS.contains(&word.as_str()))
        .collect()
}

/// Proper nouns that survive the non-person stoplist.
pub fn person_names(title: &str) -> HashSet<String> {
    proper_nouns(title)
        .into_iter()
        .filter(|word| !NON_PERSON_WORDS.contains(&word.as_str()))
        .collect()
}

/// Capitalized tokens exactly as written (`\b[A-Z][a-z]+`), including the
/// first word. Coarser than `proper_nouns`; used for the overlap fallback and
/// the entity boost.
pub fn capitalized_words(title: &str) -> HashSet<String> {
    CAPITALIZED_RE
        .find_iter(title)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if the sets share an element, or an element of one is a substring of
/// an element of the other ("trump" against "donald trump").
pub fn has_overlap(a: &HashSet<String>, b: &HashSet<String>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !a.is_disjoint(b) {
        return true;
    }
    a.iter()
        .any(|x| b.iter().any(|y| x.contains(y.as_str()) || y.contains(x.as_str())))
}

/// Names on either side of "A vs B" / "A v. B" / "A versus B".
///
/// Both sides are lowercased and trimmed, and kept only when each is longer
/// than two characters.
pub fn participants(title: &str) -> HashSet<String> {
    let mut found = HashSet::new();
    for caps in PARTICIPANTS_RE.captures_iter(title) {
        let first = caps[1].trim().to_lowercase();
        let second = caps[2].trim().to_lowercase();
        if first.chars().count() > 2 && second.chars().count() > 2 {
            found.insert(first);
            found.insert(second);
        }
    }
    found
}

/// Number of participants in `a` that equal, contain or are contained in
/// some participant of `b`. Each element of `a` counts at most once.
pub fn fuzzy_participant_matches(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.iter()
        .filter(|x| b.iter().any(|y| x.contains(y.as_str()) || y.contains(x.as_str())))
        .count()
}

fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn proper_nouns_skip_first_word_and_modals() {
        let nouns = proper_nouns("Trump says Will Biden resign, May?");
        assert_eq!(nouns, set(&["biden"]));
    }

    #[test]
    fn proper_nouns_strip_punctuation() {
        let nouns = proper_nouns("Will Donald Trump Jr. receive a pardon?");
        assert_eq!(nouns, set(&["donald", "trump", "jr"]));
    }

    #[test]
    fn person_names_drop_titles_and_places() {
        let names = person_names("Will Yair Golan be the next Prime Minister of Israel?");
        assert_eq!(names, set(&["yair", "golan"]));

        let generic = person_names("Who will be the next Prime Minister of Israel?");
        assert!(generic.is_empty(), "{generic:?}");
    }

    #[test]
    fn capitalized_words_keep_case_and_first_word() {
        let words = capitalized_words("Will Trump visit NATO in March?");
        assert_eq!(words, set(&["Will", "Trump", "March"]));
    }

    #[test]
    fn overlap_is_fuzzy() {
        assert!(has_overlap(&set(&["trump"]), &set(&["donald trump"])));
        assert!(has_overlap(&set(&["biden"]), &set(&["biden", "harris"])));
        assert!(!has_overlap(&set(&["rose"]), &set(&["buttigieg"])));
        assert!(!has_overlap(&set(&[]), &set(&["anyone"])));
    }

    #[test]
    fn participants_from_vs_constructions() {
        assert_eq!(participants("BARRY vs SEIDEL"), set(&["barry", "seidel"]));
        assert_eq!(
            participants("Monique Barry vs. Ella Seidel"),
            set(&["monique barry", "ella seidel"])
        );
        assert_eq!(participants("Lakers versus Celtics"), set(&["lakers", "celtics"]));
    }

    #[test]
    fn short_participants_are_dropped() {
        assert!(participants("AB vs Celtics").is_empty());
        assert!(participants("No matchup here").is_empty());
    }

    #[test]
    fn fuzzy_participants_count_once_per_name() {
        let a = set(&["barry", "seidel tennis match"]);
        let b = set(&["monique barry", "ella seidel tennis match"]);
        assert_eq!(fuzzy_participant_matches(&a, &b), 2);
    }
}
