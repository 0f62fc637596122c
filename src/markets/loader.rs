// Load normalized market records from JSON.
//
// Accepts either a bare array of records or an object wrapping them in a
// `markets` array, which is how the platform fetchers dump their output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::record::MarketRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Bare(Vec<MarketRecord>),
    Wrapped { markets: Vec<MarketRecord> },
}

/// Parse records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<MarketRecord>> {
    let file: RecordFile = serde_json::from_str(json)
        .context("Expected a JSON array of markets or an object with a `markets` array")?;

    Ok(match file {
        RecordFile::Bare(records) => records,
        RecordFile::Wrapped { markets } => markets,
    })
}

/// Read and parse records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<MarketRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read market file {}", path.display()))?;

    let records = parse_records(&json)
        .with_context(|| format!("Failed to parse market file {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "Loaded market records");
    Ok(records)
}
