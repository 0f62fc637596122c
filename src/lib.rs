// MarketParity: cross-platform prediction market matching
//
// This is the library root. `text` holds the per-title extractors,
// `matching` the pairwise scorer and the greedy assignment built on them.

pub mod config;
pub mod markets;
pub mod matching;
pub mod output;
pub mod text;

pub use markets::record::MarketRecord;
pub use matching::assign::{BestMatch, Match};
pub use matching::filter::filter_by_category;
pub use matching::similarity::{MarketMatcher, MatchWeights, Verdict};
