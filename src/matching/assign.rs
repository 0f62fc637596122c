// Greedy assignment of pool records to source records.
//
// The source side (Polymarket) drives iteration because its questions are
// specific and rarely duplicated; the pool side (Kalshi) often lists several
// generically worded variants of one event, so each pool record may be
// claimed at most once.
//
// This is deliberately not an optimal bipartite matching. Source records are
// processed in input order and each takes the best pool record still
// available, with the first record seen winning a tie.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use super::similarity::MarketMatcher;
use crate::markets::record::MarketRecord;
use crate::output::truncate_chars;

/// Matches at or above this score are logged individually.
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// A pool record paired with the source record it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<'a> {
    pub pool: &'a MarketRecord,
    pub source: &'a MarketRecord,
    pub score: f64,
}

/// Outcome of a single-record search. `record` is `None` when nothing
/// scored above zero or the searched record has no title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch<'a> {
    pub record: Option<&'a MarketRecord>,
    pub score: f64,
}

impl MarketMatcher {
    /// Assign pool records to source records, keeping pairs scoring at least
    /// `threshold`, sorted by score descending.
    ///
    /// No pool record appears in more than one match. Equal scores keep the
    /// order in which they were found.
    pub fn find_matches<'a>(
        &self,
        pool: &'a [MarketRecord],
        source: &'a [MarketRecord],
        threshold: f64,
    ) -> Vec<Match<'a>> {
        info!(
            pool = pool.len(),
            source = source.len(),
            threshold,
            "Searching pool markets for source markets"
        );

        let mut used: HashSet<usize> = HashSet::new();
        let mut matches = Vec::new();

        for source_record in source {
            let mut best: Option<(usize, f64)> = None;

            for (i, pool_record) in pool.iter().enumerate() {
                if used.contains(&i) {
                    continue;
                }
                let score = self.compute_similarity(pool_record, source_record);
                if score > best.map_or(0.0, |(_, s)| s) {
                    best = Some((i, score));
                }
            }

            let Some((index, score)) = best else {
                continue;
            };
            if score < threshold {
                continue;
            }

            used.insert(index);
            matches.push(Match {
                pool: &pool[index],
                source: source_record,
                score,
            });

            if score >= HIGH_CONFIDENCE {
                info!(
                    n = matches.len(),
                    source = %truncate_chars(source_record.source_title(), 50),
                    pool = %truncate_chars(pool[index].pool_title(), 50),
                    score = %format!("{score:.2}"),
                    "High-confidence match"
                );
            }
        }

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        info!(
            matched = matches.len(),
            source = source.len(),
            threshold,
            "Matching complete"
        );
        matches
    }

    /// Best source record for one pool record. Nothing is consumed; calling
    /// this repeatedly with the same inputs gives the same answer.
    pub fn search_best_match<'a>(
        &self,
        pool_record: &MarketRecord,
        source: &'a [MarketRecord],
    ) -> BestMatch<'a> {
        let mut best = BestMatch {
            record: None,
            score: 0.0,
        };
        if pool_record.pool_title().is_empty() {
            return best;
        }

        for source_record in source {
            let score = self.compute_similarity(pool_record, source_record);
            if score > best.score {
                best = BestMatch {
                    record: Some(source_record),
                    score,
                };
            }
        }
        best
    }
}
