//! Click ranking example for estate-suggest-rs
//!
//! Simulates a user clicking suggestions over a few days, persists the
//! history the way a caller would, and ranks terms by decayed popularity.

use estate_suggest_rs::clicks::now_millis;
use estate_suggest_rs::prelude::*;
use estate_suggest_rs::{
    calculate_time_weighted_score_at, sort_by_popularity_at, track_suggestion_click_at,
};

const DAY: i64 = 86_400_000;

fn main() -> Result<()> {
    println!("=== estate-suggest Click Ranking Example ===\n");

    let config = SuggestConfig::default();
    let now = now_millis();

    // (term, days ago)
    let clicks = [
        ("villa bali", 9),
        ("villa bali", 8),
        ("villa bali", 7),
        ("rumah menteng", 1),
        ("rumah menteng", 0),
        ("apartemen tebet", 0),
    ];

    let mut history = ClickHistory::new();
    for (term, days_ago) in clicks {
        let before = history.clone();
        history = track_suggestion_click_at(term, &history, now - days_ago * DAY, &config);
        // the previous value is untouched
        assert_eq!(
            get_display_count(term, &before) + 1,
            get_display_count(term, &history)
        );
    }

    let terms = ["villa bali", "apartemen tebet", "rumah menteng", "tanah bogor"];
    println!("--- Ranked by decayed popularity ---");
    let ranked = sort_by_popularity_at(&terms, &history, now, &config);
    for (i, term) in ranked.iter().enumerate() {
        println!(
            "{}. {term:<16} score {:.3}  clicks {}",
            i + 1,
            calculate_time_weighted_score_at(term, &history, now, &config),
            get_display_count(term, &history)
        );
    }
    println!();

    let path = std::env::temp_dir().join("estate-suggest-demo-clicks.json");
    history.save_json(&path)?;
    let reloaded = ClickHistory::load_json(&path)?;
    println!(
        "✓ Saved and reloaded {} terms from {}",
        reloaded.len(),
        path.display()
    );

    Ok(())
}
