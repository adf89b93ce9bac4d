// crates/estate-suggest-core/src/clicks.rs

//! Click history: the only state the suggestion core works over.
//!
//! The history is owned and persisted by the caller (a browser's local
//! storage, a JSON file, ...). Every operation here is copy-on-write: the
//! history passed in is never modified, a fresh one is returned instead, so
//! callers holding the previous value keep observing it unchanged.

use crate::config::SuggestConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Click statistics for one suggestion.
///
/// `count` is a lifetime counter and is never capped; `timestamps` holds the
/// most recent click times (epoch milliseconds, oldest first), capped at
/// [`SuggestConfig::max_timestamps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRecord {
    pub count: u64,
    #[serde(default)]
    pub timestamps: Vec<i64>,
}

impl ClickRecord {
    pub fn new(count: u64, timestamps: Vec<i64>) -> Self {
        Self { count, timestamps }
    }

    /// Epoch milliseconds of the newest retained click.
    pub fn last_clicked(&self) -> Option<i64> {
        self.timestamps.last().copied()
    }
}

/// Mapping from suggestion text to its [`ClickRecord`].
///
/// Serializes as a plain JSON object, the same shape the web front end keeps
/// in local storage:
///
/// ```json
/// { "rumah jakarta": { "count": 3, "timestamps": [1700000000000, 1700000500000] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickHistory(HashMap<String, ClickRecord>);

impl ClickHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, suggestion: &str) -> Option<&ClickRecord> {
        self.0.get(suggestion)
    }

    pub fn contains(&self, suggestion: &str) -> bool {
        self.0.contains_key(suggestion)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClickRecord)> {
        self.0.iter()
    }

    /// Sum of lifetime click counts over every suggestion, saturating at `u64::MAX`.
    pub fn total_clicks(&self) -> u64 {
        self.0.values().fold(0u64, |acc, r| acc.saturating_add(r.count))
    }

    /// Builder-style insert, for seeding histories.
    pub fn with_record(mut self, suggestion: impl Into<String>, record: ClickRecord) -> Self {
        self.0.insert(suggestion.into(), record);
        self
    }

    pub fn into_inner(self) -> HashMap<String, ClickRecord> {
        self.0
    }
}

impl From<HashMap<String, ClickRecord>> for ClickHistory {
    fn from(map: HashMap<String, ClickRecord>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, ClickRecord)> for ClickHistory {
    fn from_iter<I: IntoIterator<Item = (K, ClickRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// -----------------------------------------------------------------------------
// CLICK TRACKING
// -----------------------------------------------------------------------------

/// Records a click on `suggestion` at the current time.
///
/// Returns a new history; `current` is left untouched.
pub fn track_suggestion_click(suggestion: &str, current: &ClickHistory) -> ClickHistory {
    track_suggestion_click_at(suggestion, current, now_millis(), &SuggestConfig::default())
}

pub fn track_suggestion_click_with(
    suggestion: &str,
    current: &ClickHistory,
    config: &SuggestConfig,
) -> ClickHistory {
    track_suggestion_click_at(suggestion, current, now_millis(), config)
}

/// Records a click at `now_ms`.
///
/// An absent key starts from `{ count: 0, timestamps: [] }`. The count is
/// incremented, `now_ms` is appended and only the newest
/// `config.max_timestamps` timestamps are retained.
pub fn track_suggestion_click_at(
    suggestion: &str,
    current: &ClickHistory,
    now_ms: i64,
    config: &SuggestConfig,
) -> ClickHistory {
    let mut next = current.clone();
    let prior = current.get(suggestion).cloned().unwrap_or_default();

    let mut timestamps = prior.timestamps;
    timestamps.push(now_ms);
    if timestamps.len() > config.max_timestamps {
        let excess = timestamps.len() - config.max_timestamps;
        timestamps.drain(..excess);
    }

    next.0.insert(
        suggestion.to_string(),
        ClickRecord {
            count: prior.count.saturating_add(1),
            timestamps,
        },
    );
    next
}

/// Lifetime click count for `suggestion`, `0` if it was never clicked.
pub fn get_display_count(suggestion: &str, clicks: &ClickHistory) -> u64 {
    clicks.get(suggestion).map(|r| r.count).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn cfg() -> SuggestConfig {
        SuggestConfig::default()
    }

    #[test]
    fn first_click_creates_record() {
        let next = track_suggestion_click_at("x", &ClickHistory::new(), NOW, &cfg());
        assert_eq!(next.len(), 1);
        assert_eq!(next.get("x"), Some(&ClickRecord::new(1, vec![NOW])));
    }

    #[test]
    fn wall_clock_variant_records_one_timestamp() {
        let next = track_suggestion_click("x", &ClickHistory::new());
        let record = next.get("x").unwrap();
        assert_eq!(record.count, 1);
        assert_eq!(record.timestamps.len(), 1);
    }

    #[test]
    fn click_increments_count_and_appends() {
        let current = ClickHistory::new().with_record("x", ClickRecord::new(2, vec![NOW - 10]));
        let next = track_suggestion_click_at("x", &current, NOW, &cfg());
        let record = next.get("x").unwrap();
        assert_eq!(record.count, 3);
        assert_eq!(record.timestamps, vec![NOW - 10, NOW]);
    }

    #[test]
    fn timestamps_are_capped_oldest_first() {
        let seeded: Vec<i64> = (0..50).map(|i| NOW - 1_000 * (50 - i)).collect();
        let current = ClickHistory::new().with_record("x", ClickRecord::new(50, seeded.clone()));

        let next = track_suggestion_click_at("x", &current, NOW, &cfg());
        let record = next.get("x").unwrap();

        assert_eq!(record.timestamps.len(), 50);
        assert_eq!(record.timestamps[0], seeded[1]);
        assert_eq!(record.last_clicked(), Some(NOW));
        // the lifetime count is not capped
        assert_eq!(record.count, 51);
    }

    #[test]
    fn tracking_leaves_input_untouched() {
        let current = ClickHistory::new()
            .with_record("x", ClickRecord::new(1, vec![NOW - 5]))
            .with_record("y", ClickRecord::new(4, vec![NOW - 7, NOW - 6]));
        let snapshot = current.clone();

        let next = track_suggestion_click_at("x", &current, NOW, &cfg());
        let next = track_suggestion_click_at("z", &next, NOW, &cfg());

        assert_eq!(current, snapshot);
        assert_eq!(next.len(), 3);
        assert_eq!(next.get("y"), snapshot.get("y"));
    }

    #[test]
    fn custom_cap_is_honoured() {
        let config = SuggestConfig {
            max_timestamps: 2,
            ..SuggestConfig::default()
        };
        let mut history = ClickHistory::new();
        for t in 0..5 {
            history = track_suggestion_click_at("x", &history, NOW + t, &config);
        }
        let record = history.get("x").unwrap();
        assert_eq!(record.count, 5);
        assert_eq!(record.timestamps, vec![NOW + 3, NOW + 4]);
    }

    #[test]
    fn display_count_defaults_to_zero() {
        assert_eq!(get_display_count("missing", &ClickHistory::new()), 0);
        let history = ClickHistory::new().with_record("x", ClickRecord::new(7, vec![]));
        assert_eq!(get_display_count("x", &history), 7);
        assert_eq!(history.total_clicks(), 7);
    }

    #[test]
    fn history_json_matches_local_storage_shape() {
        let json = r#"{"rumah":{"count":2,"timestamps":[1,2]}}"#;
        let history: ClickHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.get("rumah"), Some(&ClickRecord::new(2, vec![1, 2])));
        let back = serde_json::to_string(&history).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn click_count_saturates_instead_of_overflowing() {
        let json = r#"{"x":{"count":18446744073709551615,"timestamps":[1]}}"#;
        let current: ClickHistory = serde_json::from_str(json).unwrap();
        let next = track_suggestion_click_at("x", &current, NOW, &cfg());
        let record = next.get("x").unwrap();
        assert_eq!(record.count, u64::MAX);
        assert_eq!(record.timestamps, vec![1, NOW]);

        let both = next.with_record("y", ClickRecord::new(1, vec![]));
        assert_eq!(both.total_clicks(), u64::MAX);
    }

    #[test]
    fn history_builds_from_map_and_pairs() {
        let mut map = HashMap::new();
        map.insert("rumah".to_string(), ClickRecord::new(2, vec![NOW]));
        let from_map = ClickHistory::from(map.clone());
        assert!(from_map.contains("rumah"));
        assert!(!from_map.contains("villa"));

        let collected: ClickHistory = vec![("rumah", ClickRecord::new(2, vec![NOW]))]
            .into_iter()
            .collect();
        assert_eq!(collected, from_map);
        assert_eq!(collected.into_inner(), map);
    }
}
