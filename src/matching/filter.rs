// Category filter applied to either side before matching.

use crate::markets::record::MarketRecord;

/// Keep records whose category is one of `categories` (case-insensitive), or
/// whose title contains one of them. An empty list keeps everything.
pub fn filter_by_category(records: Vec<MarketRecord>, categories: &[String]) -> Vec<MarketRecord> {
    if categories.is_empty() {
        return records;
    }

    let wanted: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

    records
        .into_iter()
        .filter(|record| {
            let category = record.category.as_deref().unwrap_or("").to_lowercase();
            let title = record.display_title().to_lowercase();
            wanted.contains(&category) || wanted.iter().any(|c| title.contains(c.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MarketRecord> {
        vec![
            MarketRecord::with_title("Will the Fed cut rates?").category("Economics"),
            MarketRecord::with_question("Bitcoin above $100k?").category("Crypto"),
            MarketRecord::with_title("Who wins the crypto bill vote?"),
            MarketRecord::with_title("Lakers vs Celtics").category("Sports"),
        ]
    }

    #[test]
    fn empty_category_list_keeps_all() {
        assert_eq!(filter_by_category(records(), &[]).len(), 4);
    }

    #[test]
    fn matches_category_or_title_text() {
        let kept = filter_by_category(records(), &["CRYPTO".to_string()]);
        let titles: Vec<&str> = kept.iter().map(MarketRecord::display_title).collect();
        assert_eq!(titles, vec!["Bitcoin above $100k?", "Who wins the crypto bill vote?"]);
    }

    #[test]
    fn several_categories() {
        let kept = filter_by_category(records(), &["sports".to_string(), "economics".to_string()]);
        assert_eq!(kept.len(), 2);
    }
}
