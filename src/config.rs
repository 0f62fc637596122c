use std::env;

use anyhow::{Context, Result};

/// Default minimum score for a pair to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum match score (MARKETPARITY_THRESHOLD, default 0.5)
    pub threshold: f64,
    /// Categories to keep before matching (MARKETPARITY_CATEGORIES,
    /// comma-separated; empty means no filtering)
    pub categories: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_vars(
            env::var("MARKETPARITY_THRESHOLD").ok().as_deref(),
            env::var("MARKETPARITY_CATEGORIES").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values. Split out from `load` so it
    /// can be tested without touching the process environment.
    pub fn from_vars(threshold: Option<&str>, categories: Option<&str>) -> Result<Self> {
        let threshold = match threshold.map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("MARKETPARITY_THRESHOLD is not a number: {raw:?}"))?,
            None => DEFAULT_THRESHOLD,
        };
        let threshold = validate_threshold(threshold)?;

        let categories = categories
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            threshold,
            categories,
        })
    }
}

/// Check that a threshold lies in [0, 1].
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("Threshold must be between 0 and 1, got {threshold}");
    }
    Ok(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn parses_threshold_and_categories() {
        let config = Config::from_vars(Some(" 0.7 "), Some("Politics, crypto,,")).unwrap();
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.categories, vec!["Politics", "crypto"]);
    }

    #[test]
    fn rejects_bad_thresholds() {
        assert!(Config::from_vars(Some("high"), None).is_err());
        assert!(Config::from_vars(Some("1.5"), None).is_err());
        assert!(Config::from_vars(Some("-0.1"), None).is_err());
        assert!(Config::from_vars(Some("NaN"), None).is_err());
    }
}
