//! estate-suggest — Command-line interface for estate-suggest-core
//!
//! Loads a geography dataset and a click history file, then runs one of the
//! suggestion operations against them. Only `click` writes anything back.
//!
//! Usage examples
//! --------------
//!
//! - Default view (empty query)
//!   $ estate-suggest suggest "" --recent a --recent b --trending c
//!
//! - Location breadcrumbs with a selected province and city
//!   $ estate-suggest --state 31 --city 3171 locations kebayoran
//!
//! - Track a click, then inspect its score
//!   $ estate-suggest click "rumah menteng"
//!   $ estate-suggest score "rumah menteng"
//!
//! Set `RUST_LOG=debug` to see what gets loaded and saved.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use estate_suggest_core::clicks::now_millis;
use estate_suggest_core::prelude::*;
use estate_suggest_core::{
    calculate_time_weighted_score_at, get_filtered_suggestions_with, get_location_suggestions_with,
    sort_by_popularity_at, track_suggestion_click_with,
};

fn print_list(label: &str, items: &[String], clicks: &ClickHistory) {
    println!("{label}:");
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        match get_display_count(item, clicks) {
            0 => println!("  - {item}"),
            n => println!("  - {item} ({n} clicks)"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => SuggestConfig::from_json_path(path)
            .with_context(|| format!("failed to read config {path}"))?,
        None => SuggestConfig::default(),
    };

    let geo = match &args.geo {
        Some(path) => Geography::load_from_path(path)
            .with_context(|| format!("failed to load geography {path}"))?,
        None => Geography::load_default().context("failed to load bundled geography")?,
    };

    let clicks = ClickHistory::load_json(&args.history)
        .with_context(|| format!("failed to read click history {}", args.history))?;

    let ctx = LocationContext::new(args.state.clone(), args.city.clone());
    let now = now_millis();

    match args.command {
        Commands::Suggest {
            query,
            recent,
            trending,
            smart,
            rank,
        } => {
            let sources = SuggestionSources {
                recent: &recent,
                trending: &trending,
                smart: &smart,
            };
            let mut out = get_filtered_suggestions_with(&query, sources, &geo, &ctx, &config);
            if rank {
                out = out.rank_by_popularity_at(&clicks, now, &config);
            }
            if out.is_empty() {
                println!("No suggestions for: {query:?}");
            } else {
                print_list("Recent", &out.recent, &clicks);
                print_list("Smart", &out.smart, &clicks);
                print_list("Trending", &out.trending, &clicks);
                print_list("Locations", &out.locations, &clicks);
            }
        }

        Commands::Locations { query } => {
            let matches = get_location_suggestions_with(&query, &geo, &ctx, &config);
            if matches.is_empty() {
                println!("No locations found matching: {query}");
            } else {
                for m in matches {
                    println!("{m}");
                }
            }
        }

        Commands::Click { term } => {
            let next = track_suggestion_click_with(&term, &clicks, &config);
            next.save_json(&args.history)
                .with_context(|| format!("failed to save click history {}", args.history))?;
            log::info!("recorded click on {term:?}");
            println!("{term}: {} clicks", get_display_count(&term, &next));
        }

        Commands::Score { term } => {
            let score = calculate_time_weighted_score_at(&term, &clicks, now, &config);
            println!("Term: {term}");
            println!("  Score: {score:.4}");
            println!("  Clicks: {}", get_display_count(&term, &clicks));
            if let Some(last) = clicks.get(&term).and_then(|r| r.last_clicked()) {
                println!("  Last clicked: {last} (epoch ms)");
            }
        }

        Commands::Rank { terms } => {
            let ranked = sort_by_popularity_at(&terms, &clicks, now, &config);
            for (i, term) in ranked.iter().enumerate() {
                let score = calculate_time_weighted_score_at(term, &clicks, now, &config);
                println!("{}. {term} ({score:.4})", i + 1);
            }
        }

        Commands::Stats => {
            let stats = geo.stats();
            println!("Geography:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Cities: {}", stats.cities);
            println!("  Areas: {}", stats.areas);
            println!("Click history ({}):", args.history);
            println!("  Terms: {}", clicks.len());
            println!("  Total clicks: {}", clicks.total_clicks());
        }

        Commands::Cache { out } => {
            geo.save_cache(&out)
                .with_context(|| format!("failed to write snapshot {out}"))?;
            println!("Wrote snapshot to {out}");
        }
    }

    Ok(())
}
