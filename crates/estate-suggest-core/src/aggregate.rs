// crates/estate-suggest-core/src/aggregate.rs

//! Merges the four suggestion categories shown under the search box.
//!
//! With an empty query the box has just been focused: the first few recent,
//! smart and trending terms are shown unfiltered and no locations. Otherwise
//! each term category is filtered by case-insensitive substring and capped,
//! and location breadcrumbs are appended.
//!
//! No ranking happens here; categories keep their source order. Callers that
//! want popularity ordering can use [`FilteredSuggestions::rank_by_popularity`].

use crate::clicks::{now_millis, ClickHistory};
use crate::config::SuggestConfig;
use crate::geo::Geography;
use crate::location::{get_location_suggestions_with, LocationContext};
use crate::scoring::sort_by_popularity_at;
use crate::text::{contains_normalized, normalize_query, MatchMode};
use serde::{Deserialize, Serialize};

/// Candidate term lists supplied by the surrounding application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionSources<'a> {
    /// The user's own past searches.
    pub recent: &'a [String],
    /// Site-wide popular searches.
    pub trending: &'a [String],
    /// Recommendation-service terms.
    pub smart: &'a [String],
}

/// Output of [`get_filtered_suggestions`]. Every list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredSuggestions {
    pub recent: Vec<String>,
    pub smart: Vec<String>,
    pub trending: Vec<String>,
    pub locations: Vec<String>,
}

impl FilteredSuggestions {
    pub fn len(&self) -> usize {
        self.recent.len() + self.smart.len() + self.trending.len() + self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reorders recent, smart and trending terms by decayed popularity.
    /// Locations keep matcher order.
    pub fn rank_by_popularity(&self, clicks: &ClickHistory) -> Self {
        self.rank_by_popularity_at(clicks, now_millis(), &SuggestConfig::default())
    }

    pub fn rank_by_popularity_at(
        &self,
        clicks: &ClickHistory,
        now_ms: i64,
        config: &SuggestConfig,
    ) -> Self {
        Self {
            recent: sort_by_popularity_at(&self.recent, clicks, now_ms, config),
            smart: sort_by_popularity_at(&self.smart, clicks, now_ms, config),
            trending: sort_by_popularity_at(&self.trending, clicks, now_ms, config),
            locations: self.locations.clone(),
        }
    }
}

/// First `cap` items containing `query`, in source order.
///
/// `query` must already be normalized with `mode`.
pub fn filter_by_query<S: AsRef<str>>(
    items: &[S],
    query: &str,
    cap: usize,
    mode: MatchMode,
) -> Vec<String> {
    items
        .iter()
        .filter(|item| contains_normalized(item.as_ref(), query, mode))
        .take(cap)
        .map(|item| item.as_ref().to_string())
        .collect()
}

fn first_n(items: &[String], cap: usize) -> Vec<String> {
    items.iter().take(cap).cloned().collect()
}

/// Builds the suggestion lists for `query` with default limits.
pub fn get_filtered_suggestions(
    query: &str,
    sources: SuggestionSources<'_>,
    geo: &Geography,
    ctx: &LocationContext,
) -> FilteredSuggestions {
    get_filtered_suggestions_with(query, sources, geo, ctx, &SuggestConfig::default())
}

pub fn get_filtered_suggestions_with(
    query: &str,
    sources: SuggestionSources<'_>,
    geo: &Geography,
    ctx: &LocationContext,
    config: &SuggestConfig,
) -> FilteredSuggestions {
    // Only a truly empty query selects the default view; whitespace goes
    // through filtering.
    if query.is_empty() {
        return FilteredSuggestions {
            recent: first_n(sources.recent, config.recent_limit),
            smart: first_n(sources.smart, config.smart_limit),
            trending: first_n(sources.trending, config.trending_limit),
            locations: Vec::new(),
        };
    }

    let mode = config.match_mode;
    let q = normalize_query(query, mode);

    let out = FilteredSuggestions {
        recent: filter_by_query(sources.recent, &q, config.recent_limit, mode),
        smart: filter_by_query(sources.smart, &q, config.smart_limit, mode),
        trending: filter_by_query(sources.trending, &q, config.trending_limit, mode),
        // The matcher trims and normalizes on its own.
        locations: get_location_suggestions_with(query, geo, ctx, config),
    };
    log::trace!(
        "suggestions for {query:?}: {} recent, {} smart, {} trending, {} locations",
        out.recent.len(),
        out.smart.len(),
        out.trending.len(),
        out.locations.len()
    );
    out
}
