// Colored terminal output for match lists, single-pair verdicts and searches.

use chrono::Utc;
use colored::Colorize;

use super::truncate_chars;
use crate::markets::record::MarketRecord;
use crate::matching::assign::{BestMatch, Match};
use crate::matching::similarity::Verdict;

/// Display a ranked list of matches.
pub fn display_matches(matches: &[Match<'_>], threshold: f64) {
    if matches.is_empty() {
        println!("No matches at or above {threshold:.2}. Try a lower --threshold.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== {} matched markets (threshold {:.2}, {}) ===",
            matches.len(),
            threshold,
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:>5}  {:<50}  {:<50}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Source".dimmed(),
        "Pool".dimmed(),
    );
    println!("  {}", "-".repeat(115).dimmed());

    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {:>4}. {}  {:<50}  {:<50}",
            i + 1,
            colorize_score(m.score),
            truncate_chars(m.source.source_title(), 47),
            truncate_chars(m.pool.pool_title(), 47),
        );
    }
    println!();

    let strong = matches.iter().filter(|m| m.score >= 0.8).count();
    if strong > 0 {
        println!("  {} {} high-confidence matches", "!!".green().bold(), strong);
    }
}

/// Display the verdict for one pair of titles.
pub fn display_verdict(pool: &MarketRecord, source: &MarketRecord, verdict: &Verdict) {
    println!("\n{}", "=== Pair score ===".bold());
    println!("  Pool:   {}", pool.pool_title());
    println!("  Source: {}", source.source_title());
    println!("  Score:  {}", colorize_score(verdict.score()));

    let gate = if verdict.is_veto() {
        format!("vetoed by {}", verdict.gate()).red()
    } else {
        verdict.gate().normal()
    };
    println!("  Gate:   {gate}");

    if let Verdict::IncompatibleTopics { first, second } = verdict {
        println!("          ({first} never matches {second})");
    }
}

/// Display the best source record for a single pool title.
pub fn display_best_match(query: &MarketRecord, best: &BestMatch<'_>) {
    println!(
        "\n{}",
        format!("=== Best match for \"{}\" ===", truncate_chars(query.pool_title(), 60)).bold()
    );

    match best.record {
        Some(record) => {
            println!("  {}  {}", colorize_score(best.score), record.source_title());
            if let Some(category) = record.category.as_deref() {
                println!("         {}", category.dimmed());
            }
        }
        None => println!("  {}", "No match found.".dimmed()),
    }
}

/// Colorize a score by confidence band.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    if score >= 0.8 {
        text.green().bold()
    } else if score >= 0.5 {
        text.yellow()
    } else if score > 0.0 {
        text.bright_red()
    } else {
        text.dimmed()
    }
}
