// MarketRecord: one prediction-market contract as seen by the matcher.
//
// The two platforms name the question text differently: Kalshi records carry
// a `title`, Polymarket records carry a `question` (and sometimes a `title`).
// Only the question text and the optional category feed the matcher. Every
// other upstream field (prices, volume, tickers, links) rides along in
// `extra` so it can be handed back to whatever renders the matches.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single normalized market record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Upstream fields the matcher never reads
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MarketRecord {
    /// Record with only a title (the pool-side shape).
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Record with only a question (the source-side shape).
    pub fn with_question(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            ..Self::default()
        }
    }

    /// Builder-style category setter.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Title as read on the pool side of a comparison.
    pub fn pool_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Title as read on the source side: a non-empty `question`, else `title`.
    pub fn source_title(&self) -> &str {
        match self.question.as_deref() {
            Some(q) if !q.is_empty() => q,
            _ => self.pool_title(),
        }
    }

    /// Whichever text is present, `title` first. Used for filtering and display.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => self.question.as_deref().unwrap_or(""),
        }
    }

    /// Lowercased category, or `None` if absent or empty.
    pub fn category_key(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_title_prefers_question() {
        let mut record = MarketRecord::with_title("Kalshi style");
        record.question = Some("Polymarket style".to_string());
        assert_eq!(record.source_title(), "Polymarket style");
        assert_eq!(record.pool_title(), "Kalshi style");
    }

    #[test]
    fn source_title_falls_back_to_title() {
        let mut record = MarketRecord::with_title("Only a title");
        assert_eq!(record.source_title(), "Only a title");

        record.question = Some(String::new());
        assert_eq!(record.source_title(), "Only a title");
    }

    #[test]
    fn missing_titles_read_as_empty() {
        let record = MarketRecord::default();
        assert_eq!(record.pool_title(), "");
        assert_eq!(record.source_title(), "");
        assert_eq!(record.display_title(), "");
    }

    #[test]
    fn category_key_is_lowercased() {
        let record = MarketRecord::with_title("x").category("Politics");
        assert_eq!(record.category_key().as_deref(), Some("politics"));
        assert_eq!(MarketRecord::with_title("x").category("").category_key(), None);
    }

    #[test]
    fn unknown_fields_are_kept() {
        let json = r#"{"title": "Will it rain?", "yes_price": 0.42, "ticker": "RAIN"}"#;
        let record: MarketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pool_title(), "Will it rain?");
        assert_eq!(record.extra["ticker"], "RAIN");
        assert!(record.category.is_none());
    }
}
