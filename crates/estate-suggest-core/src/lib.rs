// crates/estate-suggest-core/src/lib.rs

//! # estate-suggest-core
//!
//! Search-box suggestions for a property marketplace:
//!
//! - [`scoring`]: time-decayed popularity from click history, and sorting by it
//! - [`location`]: province → city → area substring matching rendered as breadcrumbs
//! - [`aggregate`]: the recent / smart / trending / location lists under the search box
//! - [`clicks`]: copy-on-write click tracking
//!
//! All of these are pure functions over caller-owned data. Reading and
//! writing that data lives in [`loader`].
//!
//! ```rust
//! use estate_suggest_core::prelude::*;
//!
//! let history = track_suggestion_click("rumah menteng", &ClickHistory::new());
//! assert_eq!(get_display_count("rumah menteng", &history), 1);
//!
//! let ranked = sort_by_popularity(&["apartemen", "rumah menteng"], &history);
//! assert_eq!(ranked[0], "rumah menteng");
//! ```

pub mod aggregate;
pub mod clicks;
pub mod config;
pub mod error;
pub mod geo;
pub mod loader;
pub mod location;
pub mod scoring;
pub mod text;

pub mod prelude;

// Re-exports
pub use crate::error::{Result, SuggestError};
pub use aggregate::{
    filter_by_query, get_filtered_suggestions, get_filtered_suggestions_with, FilteredSuggestions,
    SuggestionSources,
};
pub use clicks::{
    get_display_count, track_suggestion_click, track_suggestion_click_at,
    track_suggestion_click_with, ClickHistory, ClickRecord,
};
pub use config::SuggestConfig;
pub use geo::{Area, City, GeoStats, Geography, Province};
pub use location::{get_location_suggestions, get_location_suggestions_with, LocationContext};
pub use scoring::{
    calculate_time_weighted_score, calculate_time_weighted_score_at, sort_by_popularity,
    sort_by_popularity_at,
};
pub use text::{MatchMode, NameMatch};
