// Pairwise similarity between a pool record and a source record.
//
// The score is produced by an ordered chain of gates. Each gate either lets
// the pair through or decides it outright; the first gate that decides wins
// and nothing after it is evaluated. The order is load-bearing: a topic veto
// must beat a participant fast path, a person-name veto must beat any amount
// of word overlap.
//
//   1. topics      disjoint or incompatible topic sets        -> 0.0
//   2. polarity    same topic, opposite direction              -> 0.0
//   3. people      different people, or generic vs specific    -> 0.0
//   4. matchup     two or more shared "A vs B" participants    -> 0.95
//   5. words       a title with no meaningful words            -> 0.0
//   6. overlap     under two shared keywords or capitalized words -> capped Jaccard
//   7. blend       0.85 keyword Jaccard + 0.15 word Jaccard + boosts
//   8. penalty     topic-less pairs under 0.75 are scaled by 0.6

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::markets::record::MarketRecord;
use crate::text::entities::{
    capitalized_words, fuzzy_participant_matches, has_overlap, participants, person_names,
};
use crate::text::keywords::extract_keywords;
use crate::text::polarity::extract_polarity;
use crate::text::topics::{extract_topics, incompatible_pair, Topic};
use crate::text::words::{jaccard, meaningful_words};

/// Tunable constants of the scoring rules.
///
/// The defaults are the hand-tuned values the regression cases in
/// `tests/unit_similarity.rs` were written against.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWeights {
    /// Weight of keyword Jaccard in the blend (default 0.85)
    pub keyword_weight: f64,
    /// Weight of plain word Jaccard in the blend (default 0.15)
    pub word_weight: f64,
    /// Added when capitalized words overlap (default 0.3)
    pub entity_boost: f64,
    /// Added when both records carry the same category (default 0.1)
    pub category_boost: f64,
    /// Ceiling for pairs that fail the overlap requirement (default 0.4)
    pub fallback_cap: f64,
    /// Word Jaccard multiplier for those pairs (default 0.5)
    pub fallback_word_scale: f64,
    /// Score returned for a matching "A vs B" pair (default 0.95)
    pub participant_score: f64,
    /// Topic-less pairs scoring below this get penalized (default 0.75)
    pub no_topic_bar: f64,
    /// Multiplier applied by that penalty (default 0.6)
    pub no_topic_factor: f64,
    /// Shared keywords needed to skip the fallback (default 2)
    pub min_shared_keywords: usize,
    /// Shared capitalized words that can stand in for keywords (default 2)
    pub min_shared_capitalized: usize,
    /// Shared participants needed for the matchup fast path (default 2)
    pub min_shared_participants: usize,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            keyword_weight: 0.85,
            word_weight: 0.15,
            entity_boost: 0.3,
            category_boost: 0.1,
            fallback_cap: 0.4,
            fallback_word_scale: 0.5,
            participant_score: 0.95,
            no_topic_bar: 0.75,
            no_topic_factor: 0.6,
            min_shared_keywords: 2,
            min_shared_capitalized: 2,
            min_shared_participants: 2,
        }
    }
}

/// Which rule decided a pair, and the score it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum Verdict {
    /// One of the titles is missing or empty
    MissingTitle,
    /// Both titles have topics and none are shared
    DisjointTopics,
    /// The titles span a pair of topics that never match
    IncompatibleTopics { first: Topic, second: Topic },
    /// Same topic, but one asks "up" and the other "down"
    OppositePolarity,
    /// Both name people, and the names don't overlap
    DifferentPeople,
    /// Only one title names a specific person
    GenericVersusSpecific,
    /// Same "A vs B" matchup
    SameParticipants { score: f64 },
    /// A title has no words left after stop-word removal
    NoMeaningfulWords,
    /// Too few shared keywords and capitalized words; low-confidence Jaccard
    WeakOverlap { score: f64 },
    /// Passed every gate; weighted blend with boosts and penalty applied
    Blended { score: f64 },
}

impl Verdict {
    pub fn score(&self) -> f64 {
        match *self {
            Verdict::SameParticipants { score }
            | Verdict::WeakOverlap { score }
            | Verdict::Blended { score } => score,
            _ => 0.0,
        }
    }

    /// Short gate name for logs and terminal output.
    pub fn gate(&self) -> &'static str {
        match self {
            Verdict::MissingTitle => "missing_title",
            Verdict::DisjointTopics => "disjoint_topics",
            Verdict::IncompatibleTopics { .. } => "incompatible_topics",
            Verdict::OppositePolarity => "opposite_polarity",
            Verdict::DifferentPeople => "different_people",
            Verdict::GenericVersusSpecific => "generic_versus_specific",
            Verdict::SameParticipants { .. } => "same_participants",
            Verdict::NoMeaningfulWords => "no_meaningful_words",
            Verdict::WeakOverlap { .. } => "weak_overlap",
            Verdict::Blended { .. } => "blended",
        }
    }

    /// True if a gate rejected the pair outright.
    pub fn is_veto(&self) -> bool {
        !matches!(
            self,
            Verdict::SameParticipants { .. } | Verdict::WeakOverlap { .. } | Verdict::Blended { .. }
        )
    }
}

/// The title matcher. Stateless apart from its weights; every method is pure.
#[derive(Debug, Clone, Default)]
pub struct MarketMatcher {
    pub weights: MatchWeights,
}

impl MarketMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Similarity in [0, 1] between a pool record (read via `title`) and a
    /// source record (read via `question`, falling back to `title`).
    pub fn compute_similarity(&self, pool: &MarketRecord, source: &MarketRecord) -> f64 {
        self.explain(pool, source).score()
    }

    /// Run the gate chain and report which gate decided the pair.
    pub fn explain(&self, pool: &MarketRecord, source: &MarketRecord) -> Verdict {
        let title_a = pool.pool_title();
        let title_b = source.source_title();
        if title_a.is_empty() || title_b.is_empty() {
            return Verdict::MissingTitle;
        }

        let topics_a = extract_topics(title_a);
        let topics_b = extract_topics(title_b);

        let verdict = topic_gate(&topics_a, &topics_b)
            .or_else(|| polarity_gate(title_a, title_b, &topics_a, &topics_b))
            .or_else(|| person_gate(title_a, title_b))
            .or_else(|| self.participant_gate(title_a, title_b))
            .unwrap_or_else(|| {
                let topicless = topics_a.is_empty() || topics_b.is_empty();
                self.blend(pool, source, title_a, title_b, topicless)
            });

        debug!(
            gate = verdict.gate(),
            score = verdict.score(),
            pool = title_a,
            source = title_b,
            "Scored pair"
        );
        verdict
    }

    /// Gate 4: identical "A vs B" matchups score a fixed high value.
    ///
    /// Either two participants are shared exactly, or two participants of the
    /// first title are substrings or superstrings of names in the second.
    pub fn participant_gate(&self, title_a: &str, title_b: &str) -> Option<Verdict> {
        let participants_a = participants(title_a);
        let participants_b = participants(title_b);
        if participants_a.is_empty() || participants_b.is_empty() {
            return None;
        }

        let needed = self.weights.min_shared_participants;
        let exact = participants_a.intersection(&participants_b).count();
        let fuzzy = fuzzy_participant_matches(&participants_a, &participants_b);
        if exact >= needed || fuzzy >= needed {
            return Some(Verdict::SameParticipants {
                score: self.weights.participant_score,
            });
        }
        None
    }

    /// Gates 5 to 8: word sets, the overlap requirement, the weighted blend
    /// and the topic-less penalty.
    fn blend(
        &self,
        pool: &MarketRecord,
        source: &MarketRecord,
        title_a: &str,
        title_b: &str,
        topicless: bool,
    ) -> Verdict {
        let w = &self.weights;

        let keywords_a = extract_keywords(title_a);
        let keywords_b = extract_keywords(title_b);
        let words_a = meaningful_words(title_a);
        let words_b = meaningful_words(title_b);
        if words_a.is_empty() || words_b.is_empty() {
            return Verdict::NoMeaningfulWords;
        }

        let word_similarity = jaccard(&words_a, &words_b);
        let capitalized_a = capitalized_words(title_a);
        let capitalized_b = capitalized_words(title_b);

        let shared_keywords = keywords_a.intersection(&keywords_b).count();
        if shared_keywords < w.min_shared_keywords {
            let shared_capitalized = capitalized_a.intersection(&capitalized_b).count();
            if shared_capitalized < w.min_shared_capitalized {
                return Verdict::WeakOverlap {
                    score: w.fallback_cap.min(word_similarity * w.fallback_word_scale),
                };
            }
        }

        let mut score =
            w.keyword_weight * jaccard(&keywords_a, &keywords_b) + w.word_weight * word_similarity;
        if has_overlap(&capitalized_a, &capitalized_b) {
            score += w.entity_boost;
        }
        if same_category(pool, source) {
            score += w.category_boost;
        }
        let mut score = score.clamp(0.0, 1.0);

        if topicless && score < w.no_topic_bar {
            score *= w.no_topic_factor;
        }

        Verdict::Blended { score }
    }
}

/// Gate 1: titles that both have topics must share one, and must not span
/// an incompatible pair.
pub fn topic_gate(topics_a: &HashSet<Topic>, topics_b: &HashSet<Topic>) -> Option<Verdict> {
    if topics_a.is_empty() || topics_b.is_empty() {
        return None;
    }
    if topics_a.is_disjoint(topics_b) {
        return Some(Verdict::DisjointTopics);
    }
    incompatible_pair(topics_a, topics_b)
        .map(|(first, second)| Verdict::IncompatibleTopics { first, second })
}

/// Gate 2: titles sharing a topic must not point in opposite directions.
pub fn polarity_gate(
    title_a: &str,
    title_b: &str,
    topics_a: &HashSet<Topic>,
    topics_b: &HashSet<Topic>,
) -> Option<Verdict> {
    if topics_a.is_disjoint(topics_b) {
        return None;
    }
    if extract_polarity(title_a).opposes(extract_polarity(title_b)) {
        return Some(Verdict::OppositePolarity);
    }
    None
}

/// Gate 3: if either title names a person, both must, and the names must
/// overlap.
pub fn person_gate(title_a: &str, title_b: &str) -> Option<Verdict> {
    let names_a = person_names(title_a);
    let names_b = person_names(title_b);

    match (names_a.is_empty(), names_b.is_empty()) {
        (true, true) => None,
        (false, false) if has_overlap(&names_a, &names_b) => None,
        (false, false) => Some(Verdict::DifferentPeople),
        _ => Some(Verdict::GenericVersusSpecific),
    }
}

fn same_category(pool: &MarketRecord, source: &MarketRecord) -> bool {
    match (pool.category_key(), source.category_key()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
