//! Basic usage example for estate-suggest-rs
//!
//! This example demonstrates how to:
//! - Load the bundled geography
//! - Show the default (empty query) suggestion view
//! - Filter suggestions and match locations for a typed query

use estate_suggest_rs::prelude::*;

fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn main() -> Result<()> {
    println!("=== estate-suggest Basic Usage Example ===\n");

    let geo = Geography::load_default()?;
    let stats = geo.stats();
    println!(
        "✓ Geography loaded: {} provinces, {} cities, {} areas\n",
        stats.provinces, stats.cities, stats.areas
    );

    let recent = terms(&[
        "rumah kebayoran",
        "apartemen tebet",
        "ruko cilandak",
        "kost setiabudi",
    ]);
    let trending = terms(&[
        "rumah murah jakarta",
        "villa bali",
        "apartemen dekat mrt",
        "tanah bogor",
        "rumah subsidi",
    ]);
    let smart = terms(&["rumah 2 lantai", "apartemen studio"]);
    let sources = SuggestionSources {
        recent: &recent,
        trending: &trending,
        smart: &smart,
    };
    let ctx = LocationContext::new(Some("31".into()), Some("3171".into()));

    // Example 1: search box just focused
    println!("--- Example 1: Default view ---");
    let view = get_filtered_suggestions("", sources, &geo, &ctx);
    println!("Recent:   {:?}", view.recent);
    println!("Smart:    {:?}", view.smart);
    println!("Trending: {:?}", view.trending);
    println!();

    // Example 2: typed query
    for query in ["rumah", "kebayoran", "jakarta"] {
        println!("--- Query: {query:?} ---");
        let view = get_filtered_suggestions(query, sources, &geo, &ctx);
        println!("Recent:    {:?}", view.recent);
        println!("Smart:     {:?}", view.smart);
        println!("Trending:  {:?}", view.trending);
        println!("Locations: {:?}", view.locations);
        println!();
    }

    Ok(())
}
