// Keyword extraction: domain terms plus normalized numeric tokens.
//
// Keywords are what the matcher weighs most heavily: two titles about the
// same contract almost always share a person, a league, a coin, a year or a
// dollar threshold. Generic words are handled separately in `words`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Curated vocabulary, matched as lowercase substrings of the title.
pub const IMPORTANT_KEYWORDS: &[&str] = &[
    // Politics - people
    "trump", "biden", "harris", "desantis", "obama", "clinton",
    "mcconnell", "pelosi", "pence", "vivek", "haley",
    // Politics - events
    "president", "election", "senate", "congress", "republican", "democrat",
    "gop", "primary", "impeach", "nomination",
    // Crypto
    "bitcoin", "btc", "ethereum", "eth", "solana", "sol",
    "dogecoin", "doge", "matic", "polygon", "usdc", "usdt",
    "cardano", "ada", "polkadot", "dot", "avalanche", "avax",
    // Sports - leagues and events
    "nfl", "nba", "mlb", "nhl", "super", "bowl", "championship", "mvp",
    "playoffs", "series", "finals", "cup", "olympics",
    // Sports - teams
    "lakers", "warriors", "celtics", "yankees", "dodgers", "cowboys",
    "patriots", "chiefs", "ravens", "texans",
    // Companies and tech
    "apple", "google", "amazon", "microsoft", "tesla", "meta", "nvidia",
    "spacex", "openai", "anthropic",
    // People - tech and business
    "elon", "musk", "bezos", "zuckerberg", "gates", "buffett",
    // Economics
    "gdp", "inflation", "recession", "fed", "unemployment", "cpi",
    // Places
    "china", "russia", "ukraine", "taiwan", "israel", "iran",
    "california", "texas", "florida", "mars",
];

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("valid year pattern"));

static DOLLAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s*(\d+(?:,\d{3})*(?:\.\d+)?)\s*([kmb])?").expect("valid dollar pattern")
});

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid percent pattern"));

static GROUPED_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:,\d{3})+)\b").expect("valid number pattern"));

/// Extract the keyword set for a title.
///
/// Empty input yields an empty set. Numeric literals that fail to parse are
/// skipped rather than reported.
pub fn extract_keywords(title: &str) -> HashSet<String> {
    let mut keywords = HashSet::new();
    if title.is_empty() {
        return keywords;
    }

    let lower = title.to_lowercase();

    for keyword in IMPORTANT_KEYWORDS {
        if lower.contains(keyword) {
            keywords.insert((*keyword).to_string());
        }
    }

    for caps in YEAR_RE.captures_iter(title) {
        keywords.insert(caps[1].to_string());
    }

    for caps in DOLLAR_RE.captures_iter(&lower) {
        let amount = caps[1].replace(',', "");
        let suffix = caps.get(2).map(|m| m.as_str());
        if let Some(normalized) = normalize_dollars(&amount, suffix) {
            keywords.insert(format!("${normalized}"));
        }
    }

    for caps in PERCENT_RE.captures_iter(title) {
        keywords.insert(format!("{}%", &caps[1]));
    }

    for caps in GROUPED_NUMBER_RE.captures_iter(title) {
        keywords.insert(caps[1].replace(',', ""));
    }

    keywords
}

/// Scale a dollar amount by its k/m/b suffix, truncating to an integer.
///
/// Without a suffix the amount is kept as written (minus separators).
fn normalize_dollars(amount: &str, suffix: Option<&str>) -> Option<String> {
    let multiplier = match suffix {
        Some("k") => 1e3,
        Some("m") => 1e6,
        Some("b") => 1e9,
        _ => return Some(amount.to_string()),
    };

    let value: f64 = amount.parse().ok()?;
    // Formatted from the float so huge amounts keep their digits.
    Some(format!("{:.0}", (value * multiplier).trunc()))
}
