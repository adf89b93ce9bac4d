// crates/estate-suggest-core/src/scoring.rs

//! Time-decayed popularity.
//!
//! Each retained click contributes `exp(-decay_rate * age_in_days)`; a
//! suggestion's score is the sum over its clicks. Recent clicks count almost
//! fully, a ten-day-old click contributes about a third.

use crate::clicks::{now_millis, ClickHistory};
use crate::config::{SuggestConfig, MS_PER_DAY};

/// Decayed popularity of `suggestion`, measured against the current time.
///
/// Returns exactly `0.0` when the suggestion has no retained clicks.
pub fn calculate_time_weighted_score(suggestion: &str, clicks: &ClickHistory) -> f64 {
    calculate_time_weighted_score_at(suggestion, clicks, now_millis(), &SuggestConfig::default())
}

/// Decayed popularity of `suggestion` at `now_ms`.
///
/// Timestamps are not validated: a timestamp after `now_ms` has a negative
/// age and contributes more than `1.0`.
pub fn calculate_time_weighted_score_at(
    suggestion: &str,
    clicks: &ClickHistory,
    now_ms: i64,
    config: &SuggestConfig,
) -> f64 {
    let Some(record) = clicks.get(suggestion) else {
        return 0.0;
    };
    if record.timestamps.is_empty() {
        return 0.0;
    }

    record
        .timestamps
        .iter()
        .map(|&ts| {
            let age_days = (now_ms as f64 - ts as f64) / MS_PER_DAY;
            (-config.decay_rate * age_days).exp()
        })
        .sum()
}

/// Returns `items` ordered by descending decayed popularity.
///
/// The input slice is not modified. Items with equal scores (including all
/// never-clicked items, which score `0.0`) keep their input order.
pub fn sort_by_popularity<S: AsRef<str>>(items: &[S], clicks: &ClickHistory) -> Vec<String> {
    sort_by_popularity_at(items, clicks, now_millis(), &SuggestConfig::default())
}

pub fn sort_by_popularity_at<S: AsRef<str>>(
    items: &[S],
    clicks: &ClickHistory,
    now_ms: i64,
    config: &SuggestConfig,
) -> Vec<String> {
    // Score once per item against a single clock reading.
    let mut scored: Vec<(f64, &str)> = items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            (
                calculate_time_weighted_score_at(item, clicks, now_ms, config),
                item,
            )
        })
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .map(|(_, item)| item.to_string())
        .collect()
}
