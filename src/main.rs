use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use marketparity::config::{validate_threshold, Config};
use marketparity::markets::loader::load_records;
use marketparity::output::{json, terminal};
use marketparity::{filter_by_category, MarketMatcher, MarketRecord};

/// MarketParity: find the same prediction market on Kalshi and Polymarket.
///
/// Matching is a transparent rule engine over the question titles: topic and
/// person-name vetoes, "A vs B" matchups, and keyword/word overlap.
#[derive(Parser)]
#[command(name = "marketparity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match two exported market lists against each other
    Match {
        /// Pool-side markets (Kalshi export, read via `title`)
        pool: PathBuf,

        /// Source-side markets (Polymarket export, read via `question`)
        source: PathBuf,

        /// Minimum score to report (default: MARKETPARITY_THRESHOLD or 0.5)
        #[arg(long)]
        threshold: Option<f64>,

        /// Only match markets in these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a single pair of titles and show which rule decided it
    Score {
        /// Pool-side title
        pool_title: String,

        /// Source-side title
        source_title: String,

        /// Category of the pool-side market
        #[arg(long)]
        category_a: Option<String>,

        /// Category of the source-side market
        #[arg(long)]
        category_b: Option<String>,
    },

    /// Find the best source-side market for one title
    Search {
        /// The title to look up
        title: String,

        /// Source-side markets to search
        source: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marketparity=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let matcher = MarketMatcher::new();

    match cli.command {
        Commands::Match {
            pool,
            source,
            threshold,
            categories,
            json: as_json,
        } => {
            let config = Config::load()?;
            let threshold = validate_threshold(threshold.unwrap_or(config.threshold))?;
            let categories = if categories.is_empty() {
                config.categories
            } else {
                categories
            };

            let pool = filter_by_category(load_records(&pool)?, &categories);
            let source = filter_by_category(load_records(&source)?, &categories);
            if !categories.is_empty() {
                info!(
                    pool = pool.len(),
                    source = source.len(),
                    categories = ?categories,
                    "Applied category filter"
                );
            }

            let matches = matcher.find_matches(&pool, &source, threshold);

            if as_json {
                println!("{}", json::matches_to_json(&matches, threshold)?);
            } else {
                terminal::display_matches(&matches, threshold);
            }
        }

        Commands::Score {
            pool_title,
            source_title,
            category_a,
            category_b,
        } => {
            let pool = MarketRecord {
                category: category_a,
                ..MarketRecord::with_title(pool_title)
            };
            let source = MarketRecord {
                category: category_b,
                ..MarketRecord::with_question(source_title)
            };

            let verdict = matcher.explain(&pool, &source);
            terminal::display_verdict(&pool, &source, &verdict);
        }

        Commands::Search { title, source } => {
            let source = load_records(&source)?;
            let query = MarketRecord::with_title(title);

            let best = matcher.search_best_match(&query, &source);
            terminal::display_best_match(&query, &best);
        }
    }

    Ok(())
}
