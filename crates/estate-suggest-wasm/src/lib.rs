//! estate-suggest-wasm — WebAssembly bindings for estate-suggest-core
//!
//! The browser front end owns the click history (in local storage) and the
//! candidate term lists; this crate exposes the pure suggestion functions to
//! it with plain JS values in and out.
//!
//! Quick start
//! -----------
//! ```javascript
//! import init, {
//!   load_geography, get_filtered_suggestions, track_suggestion_click,
//! } from 'estate-suggest-wasm';
//!
//! await init();
//! load_geography(await (await fetch('/geography.json')).text());
//!
//! let clicks = JSON.parse(localStorage.getItem('suggestionClicks') ?? '{}');
//! const lists = get_filtered_suggestions('jakarta', recent, trending, smart, '31', null);
//! clicks = track_suggestion_click(lists.locations[0], clicks);
//! localStorage.setItem('suggestionClicks', JSON.stringify(clicks));
//! ```
//!
//! Notes
//! -----
//! - Click histories are plain objects: `{ term: { count, timestamps } }`.
//! - `now` is read from `Date.now()`.
//! - Location functions use the geography registered with `load_geography`;
//!   before that they see an empty taxonomy.
use std::cell::RefCell;

use estate_suggest_core::{
    calculate_time_weighted_score_at, get_filtered_suggestions_with, get_location_suggestions_with,
    sort_by_popularity_at, track_suggestion_click_at, ClickHistory, Geography, LocationContext,
    SuggestConfig, SuggestionSources,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

thread_local! {
    static GEO: RefCell<Geography> = RefCell::new(Geography::default());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing estate-suggest WASM module...".into());
}

/* --------------------------------------------------------------------------
   Marshalling
-------------------------------------------------------------------------- */

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

// Plain objects instead of ES2015 Maps, so results survive JSON.stringify.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn clicks_from(value: JsValue) -> Result<ClickHistory, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(ClickHistory::new());
    }
    from_value(value).map_err(JsValue::from)
}

fn terms_from(value: JsValue) -> Result<Vec<String>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }
    from_value(value).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Geography
-------------------------------------------------------------------------- */

/// Registers the province/city/area taxonomy (JSON text) and returns its stats.
#[wasm_bindgen]
pub fn load_geography(json: &str) -> Result<JsValue, JsValue> {
    let geo: Geography = serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let stats = geo.stats();
    web_sys::console::log_1(
        &format!(
            "✓ Loaded {} provinces, {} cities, {} areas",
            stats.provinces, stats.cities, stats.areas
        )
        .into(),
    );
    GEO.with(|slot| *slot.borrow_mut() = geo);
    to_js(&stats)
}

#[wasm_bindgen]
pub fn get_location_suggestions(
    query: &str,
    current_state: Option<String>,
    current_city: Option<String>,
) -> Result<JsValue, JsValue> {
    let ctx = LocationContext::new(current_state, current_city);
    let out = GEO.with(|slot| {
        get_location_suggestions_with(query, &slot.borrow(), &ctx, &SuggestConfig::default())
    });
    to_js(&out)
}

/* --------------------------------------------------------------------------
   Aggregation
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_filtered_suggestions(
    query: &str,
    recent: JsValue,
    trending: JsValue,
    smart: JsValue,
    current_state: Option<String>,
    current_city: Option<String>,
) -> Result<JsValue, JsValue> {
    let recent = terms_from(recent)?;
    let trending = terms_from(trending)?;
    let smart = terms_from(smart)?;
    let ctx = LocationContext::new(current_state, current_city);
    let sources = SuggestionSources {
        recent: &recent,
        trending: &trending,
        smart: &smart,
    };

    let out = GEO.with(|slot| {
        get_filtered_suggestions_with(
            query,
            sources,
            &slot.borrow(),
            &ctx,
            &SuggestConfig::default(),
        )
    });
    to_js(&out)
}

/* --------------------------------------------------------------------------
   Popularity
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn calculate_time_weighted_score(
    suggestion: &str,
    click_data: JsValue,
) -> Result<f64, JsValue> {
    let clicks = clicks_from(click_data)?;
    Ok(calculate_time_weighted_score_at(suggestion, &clicks, now_ms(), &SuggestConfig::default()))
}

#[wasm_bindgen]
pub fn sort_by_popularity(items: JsValue, click_data: JsValue) -> Result<JsValue, JsValue> {
    let items = terms_from(items)?;
    let clicks = clicks_from(click_data)?;
    let sorted = sort_by_popularity_at(&items, &clicks, now_ms(), &SuggestConfig::default());
    to_js(&sorted)
}

/// Returns a new click history with the click recorded; the argument is not modified.
#[wasm_bindgen]
pub fn track_suggestion_click(
    suggestion: &str,
    current_clicks: JsValue,
) -> Result<JsValue, JsValue> {
    let clicks = clicks_from(current_clicks)?;
    let next = track_suggestion_click_at(suggestion, &clicks, now_ms(), &SuggestConfig::default());
    to_js(&next)
}

#[wasm_bindgen]
pub fn get_display_count(suggestion: &str, click_data: JsValue) -> Result<f64, JsValue> {
    let clicks = clicks_from(click_data)?;
    Ok(estate_suggest_core::get_display_count(suggestion, &clicks) as f64)
}
