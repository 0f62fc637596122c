// Composition tests: the chain a caller runs end to end:
//   JSON export -> records -> category filter -> assignment -> output
// without any network access. One test writes a fixture to the temp dir.

use std::fs;

use marketparity::markets::loader::{load_records, parse_records};
use marketparity::output::json::matches_to_json;
use marketparity::output::truncate_chars;
use marketparity::{filter_by_category, MarketMatcher};

const KALSHI_EXPORT: &str = r#"{
  "markets": [
    {"title": "Will Donald Trump win the election?", "category": "Politics", "ticker": "KXPRES", "yes_price": 0.52},
    {"title": "Will Trump recognize Somaliland?", "category": "Politics", "ticker": "KXSOMALI"},
    {"title": "BARRY vs SEIDEL", "category": "Sports", "ticker": "KXTENNIS"},
    {"title": "Will Bitcoin reach $100k in 2025?", "category": "Crypto", "ticker": "KXBTC"}
  ]
}"#;

const POLYMARKET_EXPORT: &str = r#"[
  {"question": "Will Trump win the election?", "category": "politics", "slug": "trump-election", "yes_price": 0.55},
  {"question": "Will Trump deport less than 250,000?", "category": "politics"},
  {"question": "Barry vs Seidel", "category": "sports"},
  {"question": "Will Bitcoin reach $100k in 2025?", "category": "crypto"}
]"#;

#[test]
fn export_to_ranked_matches() {
    let pool = parse_records(KALSHI_EXPORT).unwrap();
    let source = parse_records(POLYMARKET_EXPORT).unwrap();

    let matches = MarketMatcher::new().find_matches(&pool, &source, 0.5);
    let titles: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.pool.pool_title(), m.source.source_title()))
        .collect();

    assert_eq!(
        titles,
        vec![
            ("Will Donald Trump win the election?", "Will Trump win the election?"),
            ("Will Bitcoin reach $100k in 2025?", "Will Bitcoin reach $100k in 2025?"),
            ("BARRY vs SEIDEL", "Barry vs Seidel"),
        ]
    );
    assert!(matches.iter().all(|m| m.pool.pool_title() != "Will Trump recognize Somaliland?"));
}

#[test]
fn category_filter_narrows_both_sides() {
    let categories = vec!["Sports".to_string()];
    let pool = filter_by_category(parse_records(KALSHI_EXPORT).unwrap(), &categories);
    let source = filter_by_category(parse_records(POLYMARKET_EXPORT).unwrap(), &categories);
    assert_eq!(pool.len(), 1);
    assert_eq!(source.len(), 1);

    let matches = MarketMatcher::new().find_matches(&pool, &source, 0.5);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score, 0.95);
}

#[test]
fn json_report_keeps_upstream_fields() {
    let pool = parse_records(KALSHI_EXPORT).unwrap();
    let source = parse_records(POLYMARKET_EXPORT).unwrap();
    let matches = MarketMatcher::new().find_matches(&pool, &source, 0.9);

    let json = matches_to_json(&matches, 0.9).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value["matches"][0];
    assert_eq!(first["pool"]["ticker"], "KXPRES");
    assert_eq!(first["source"]["slug"], "trump-election");
    assert_eq!(first["score"], 1.0);
}

#[test]
fn load_from_disk_and_search() {
    let path = std::env::temp_dir().join("marketparity_composition_source.json");
    fs::write(&path, POLYMARKET_EXPORT).unwrap();
    let source = load_records(&path).unwrap();
    let _ = fs::remove_file(&path);

    let pool = parse_records(KALSHI_EXPORT).unwrap();
    let best = MarketMatcher::new().search_best_match(&pool[0], &source);
    let found = best.record.unwrap();
    assert_eq!(found.source_title(), "Will Trump win the election?");
    assert_eq!(truncate_chars(found.source_title(), 10), "Will Trump...");
}
