// Polarity: whether a title asks about something going up or going down.
//
// "GDP above 5%" and "Negative GDP growth" share a topic but are opposite
// bets. Counting indicator phrases is crude, but it catches those pairs.

use serde::Serialize;

/// Direction a title leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Polarity {
    /// True for a positive/negative pair in either order.
    pub fn opposes(self, other: Polarity) -> bool {
        matches!(
            (self, other),
            (Polarity::Positive, Polarity::Negative) | (Polarity::Negative, Polarity::Positive)
        )
    }
}

const NEGATIVE_INDICATORS: &[&str] = &[
    "negative", "below", "less than", "under", "decrease", "decline",
    "fall", "drop", "lose", "fail", "not", "won't", "resign", "remove",
];

const POSITIVE_INDICATORS: &[&str] = &[
    "positive", "above", "more than", "over", "increase", "rise",
    "reach", "exceed", "win", "achieve", "success",
];

/// Classify a title by counting indicator phrases present in it.
///
/// Each phrase counts at most once. Ties (including zero/zero) are neutral.
pub fn extract_polarity(title: &str) -> Polarity {
    if title.is_empty() {
        return Polarity::Neutral;
    }

    let lower = title.to_lowercase();
    let negative = NEGATIVE_INDICATORS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    let positive = POSITIVE_INDICATORS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();

    if negative > positive {
        Polarity::Negative
    } else if positive > negative {
        Polarity::Positive
    } else {
        Polarity::Neutral
    }
}
