// crates/estate-suggest-core/src/prelude.rs
pub use crate::aggregate::{get_filtered_suggestions, FilteredSuggestions, SuggestionSources};
pub use crate::clicks::{get_display_count, track_suggestion_click, ClickHistory, ClickRecord};
pub use crate::config::SuggestConfig;
pub use crate::error::{Result, SuggestError};
pub use crate::geo::{Area, City, Geography, Province};
pub use crate::location::{get_location_suggestions, LocationContext};
pub use crate::scoring::{calculate_time_weighted_score, sort_by_popularity};
pub use crate::text::{MatchMode, NameMatch};
