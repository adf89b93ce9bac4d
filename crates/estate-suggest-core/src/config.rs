// crates/estate-suggest-core/src/config.rs

//! Tuning knobs for scoring, click tracking and aggregation.
//!
//! Every constant the suggestion functions rely on lives in
//! [`SuggestConfig`]. The plain entry points (`get_filtered_suggestions`,
//! `track_suggestion_click`, ...) use [`SuggestConfig::default`]; the
//! `*_with` variants take an explicit configuration.

use crate::text::MatchMode;
use serde::{Deserialize, Serialize};

/// Popularity decay per day of click age.
pub const DECAY_RATE: f64 = 0.1;
/// Milliseconds in one day; click ages are measured in days.
pub const MS_PER_DAY: f64 = 86_400_000.0;
/// Retained timestamps per suggestion.
pub const MAX_TIMESTAMPS: usize = 50;

pub const RECENT_LIMIT: usize = 3;
pub const SMART_LIMIT: usize = 3;
pub const TRENDING_LIMIT: usize = 4;
pub const LOCATION_LIMIT: usize = 5;
/// Shortest trimmed query that triggers location matching.
pub const MIN_LOCATION_QUERY: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Exponential decay rate, in 1/day.
    pub decay_rate: f64,
    /// Cap on retained click timestamps per suggestion (oldest evicted first).
    pub max_timestamps: usize,
    pub recent_limit: usize,
    pub smart_limit: usize,
    pub trending_limit: usize,
    pub location_limit: usize,
    /// Minimum trimmed query length (in chars) for location matching.
    pub min_location_query: usize,
    /// How queries and candidates are normalized before substring matching.
    pub match_mode: MatchMode,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            decay_rate: DECAY_RATE,
            max_timestamps: MAX_TIMESTAMPS,
            recent_limit: RECENT_LIMIT,
            smart_limit: SMART_LIMIT,
            trending_limit: TRENDING_LIMIT,
            location_limit: LOCATION_LIMIT,
            min_location_query: MIN_LOCATION_QUERY,
            match_mode: MatchMode::Lowercase,
        }
    }
}

#[cfg(feature = "json")]
impl SuggestConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            crate::SuggestError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        log::debug!("loaded suggestion config from {}", path.display());
        Self::from_json_str(&data)
    }
}
