// Topic classification: coarse subject tags that gate unrelated titles.
//
// Two titles can share a name and a year and still be about different
// things ("Will Trump recognize Somaliland?" vs "Will Trump deport 250,000?").
// Topics capture the subject or action of a market so the matcher can veto
// such pairs before any word overlap is counted.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// A subject tag derived from phrase membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    PresidentialElection,
    Governorship,
    Impeachment,
    Pardon,
    TradeDeficit,
    BudgetDeficit,
    Gdp,
    Inflation,
    Wealth,
    Deportation,
    Immigration,
    Healthcare,
    Meeting,
    Price,
    SportsMatch,
    Recognize,
    BuyAcquire,
    Ipo,
    ProductLaunch,
    Lawsuit,
    SupremeCourt,
    BondActor,
    Nfl,
    Nba,
    Cabinet,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::PresidentialElection => "presidential_election",
            Topic::Governorship => "governorship",
            Topic::Impeachment => "impeachment",
            Topic::Pardon => "pardon",
            Topic::TradeDeficit => "trade_deficit",
            Topic::BudgetDeficit => "budget_deficit",
            Topic::Gdp => "gdp",
            Topic::Inflation => "inflation",
            Topic::Wealth => "wealth",
            Topic::Deportation => "deportation",
            Topic::Immigration => "immigration",
            Topic::Healthcare => "healthcare",
            Topic::Meeting => "meeting",
            Topic::Price => "price",
            Topic::SportsMatch => "sports_match",
            Topic::Recognize => "recognize",
            Topic::BuyAcquire => "buy_acquire",
            Topic::Ipo => "ipo",
            Topic::ProductLaunch => "product_launch",
            Topic::Lawsuit => "lawsuit",
            Topic::SupremeCourt => "supreme_court",
            Topic::BondActor => "bond_actor",
            Topic::Nfl => "nfl",
            Topic::Nba => "nba",
            Topic::Cabinet => "cabinet",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrase lists per topic, matched as lowercase substrings.
pub const TOPIC_PHRASES: &[(Topic, &[&str])] = &[
    // Elections and politics
    (Topic::PresidentialElection, &["presidential election", "president", "nominee", "nomination"]),
    (Topic::Governorship, &["governorship", "governor"]),
    (Topic::Impeachment, &["impeach", "impeachment", "remove", "resign", "resignation"]),
    (Topic::Pardon, &["pardon", "pardoned", "clemency"]),
    // Economics
    (Topic::TradeDeficit, &["trade deficit", "trade balance", "exports", "imports"]),
    (
        Topic::BudgetDeficit,
        &["budget", "deficit", "surplus", "debt", "spending", "fiscal", "reduce the deficit"],
    ),
    (Topic::Gdp, &["gdp", "growth", "economy", "economic", "recession"]),
    (Topic::Inflation, &["inflation", "cpi", "prices", "deflation"]),
    (
        Topic::Wealth,
        &["trillionaire", "billionaire", "millionaire", "net worth", "richest", "wealth"],
    ),
    // Immigration
    (Topic::Deportation, &["deport", "deportation", "deported"]),
    (Topic::Immigration, &["immigration", "border", "visa", "green card"]),
    (
        Topic::Healthcare,
        &["ivf", "healthcare", "hospital", "medical", "insurance", "obamacare"],
    ),
    (Topic::Meeting, &["meeting", "meet", "summit", "visit", "conference"]),
    (Topic::Price, &["price", "reach", "above", "below", "hit", "trade"]),
    (Topic::SportsMatch, &["vs", "versus", "game", "match", "play"]),
    // Specific actions
    (Topic::Recognize, &["recognize", "recognition", "acknowledge"]),
    (
        Topic::BuyAcquire,
        &["buy", "purchase", "acquire", "acquisition", "take", "takeover"],
    ),
    (Topic::Ipo, &["ipo", "public offering", "go public"]),
    (
        Topic::ProductLaunch,
        &["launch", "release", "announce", "unveil", "product"],
    ),
    (
        Topic::Lawsuit,
        &["lawsuit", "sue", "litigation", "legal action", "win his lawsuit"],
    ),
    (Topic::SupremeCourt, &["supreme court", "justice", "scotus"]),
    (Topic::BondActor, &["james bond", "007", "bond actor"]),
    (Topic::Nfl, &["nfl", "super bowl", "football"]),
    (Topic::Nba, &["nba", "basketball"]),
    (Topic::Cabinet, &["cabinet"]),
];

/// Topic pairs that never describe the same event, even when the titles
/// share some other topic. Checked in both directions.
pub const INCOMPATIBLE_TOPICS: &[(Topic, Topic)] = &[
    (Topic::TradeDeficit, Topic::BudgetDeficit),
    (Topic::Pardon, Topic::PresidentialElection),
    (Topic::Pardon, Topic::Governorship),
    (Topic::Pardon, Topic::Impeachment),
    (Topic::Ipo, Topic::ProductLaunch),
    (Topic::Nfl, Topic::Nba),
    (Topic::SupremeCourt, Topic::PresidentialElection),
    (Topic::Governorship, Topic::PresidentialElection),
    (Topic::Lawsuit, Topic::PresidentialElection),
    (Topic::Cabinet, Topic::PresidentialElection),
];

/// Classify a title into zero or more topics.
///
/// A topic is added as soon as one of its phrases appears in the lowercased
/// title; the remaining phrases of that topic are not checked.
pub fn extract_topics(title: &str) -> HashSet<Topic> {
    if title.is_empty() {
        return HashSet::new();
    }

    let lower = title.to_lowercase();
    TOPIC_PHRASES
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
        .map(|(topic, _)| *topic)
        .collect()
}

/// Find the first incompatible pair spanning the two topic sets, if any.
pub fn incompatible_pair(
    topics_a: &HashSet<Topic>,
    topics_b: &HashSet<Topic>,
) -> Option<(Topic, Topic)> {
    INCOMPATIBLE_TOPICS.iter().copied().find(|&(x, y)| {
        (topics_a.contains(&x) && topics_b.contains(&y))
            || (topics_a.contains(&y) && topics_b.contains(&x))
    })
}
