// JSON export of match results, for piping into whatever renders them.

use anyhow::Result;
use serde::Serialize;

use crate::matching::assign::Match;

#[derive(Serialize)]
struct MatchReport<'a> {
    generated_at: String,
    threshold: f64,
    matches: &'a [Match<'a>],
}

/// Serialize matches, including every upstream field of both records.
pub fn matches_to_json(matches: &[Match<'_>], threshold: f64) -> Result<String> {
    let report = MatchReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        threshold,
        matches,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markets::record::MarketRecord;

    #[test]
    fn report_carries_both_records_and_score() {
        let mut pool = MarketRecord::with_title("Will Trump win the election?");
        pool.extra
            .insert("yes_price".to_string(), serde_json::json!(0.41));
        let source = MarketRecord::with_question("Will Trump win the election?");
        let matches = vec![Match {
            pool: &pool,
            source: &source,
            score: 1.0,
        }];

        let json = matches_to_json(&matches, 0.5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["threshold"], 0.5);
        assert_eq!(value["matches"][0]["score"], 1.0);
        assert_eq!(value["matches"][0]["pool"]["yes_price"], 0.41);
        assert_eq!(
            value["matches"][0]["source"]["question"],
            "Will Trump win the election?"
        );
    }
}
