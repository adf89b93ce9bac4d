// crates/estate-suggest-core/src/location.rs

//! Hierarchical location matching.
//!
//! A query is matched by substring against every province, city and area
//! name. Matches render as breadcrumbs:
//!
//! | Level    | Output                                  |
//! |----------|-----------------------------------------|
//! | province | `"DKI Jakarta"`                         |
//! | city     | `"Jakarta Selatan, DKI Jakarta"`        |
//! | area     | `"Kebayoran Baru, Jakarta Selatan, DKI Jakarta"` |
//!
//! Parent names in the breadcrumb come from the caller's current selection
//! ([`LocationContext`]), not from the matched entity's real parent. A city
//! matched while another province is selected is labelled with that other
//! province. Unknown or absent selections render as empty strings.

use crate::config::SuggestConfig;
use crate::geo::Geography;
use crate::text::{normalize_query, NameMatch};
use serde::{Deserialize, Serialize};

/// The province and city the user currently has selected, by code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    pub current_state: Option<String>,
    pub current_city: Option<String>,
}

impl LocationContext {
    pub fn new(current_state: Option<String>, current_city: Option<String>) -> Self {
        Self {
            current_state,
            current_city,
        }
    }

    /// Name of the selected province, or `""`.
    fn province_name<'a>(&self, geo: &'a Geography) -> &'a str {
        self.current_state
            .as_deref()
            .and_then(|code| geo.find_province_by_code(code))
            .map_or("", |p| p.name.as_str())
    }

    /// Name of the selected city, or `""`.
    fn city_name<'a>(&self, geo: &'a Geography) -> &'a str {
        self.current_city
            .as_deref()
            .and_then(|code| geo.find_city_by_code(code))
            .map_or("", |c| c.name.as_str())
    }
}

/// Location breadcrumbs matching `query`, at most five.
///
/// Queries shorter than two characters after trimming yield nothing.
pub fn get_location_suggestions(
    query: &str,
    geo: &Geography,
    ctx: &LocationContext,
) -> Vec<String> {
    get_location_suggestions_with(query, geo, ctx, &SuggestConfig::default())
}

pub fn get_location_suggestions_with(
    query: &str,
    geo: &Geography,
    ctx: &LocationContext,
    config: &SuggestConfig,
) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < config.min_location_query {
        return Vec::new();
    }
    let q = normalize_query(trimmed, config.match_mode);
    let mode = config.match_mode;

    let province_name = ctx.province_name(geo);
    let city_name = ctx.city_name(geo);

    let mut out = Vec::new();

    for p in &geo.provinces {
        if p.name_contains(&q, mode) {
            out.push(p.name.clone());
        }
    }

    for c in &geo.cities {
        if c.name_contains(&q, mode) {
            out.push(format!("{}, {}", c.name, province_name));
        }
    }

    for a in &geo.areas {
        if a.name_contains(&q, mode) {
            out.push(format!("{}, {}, {}", a.name, city_name, province_name));
        }
    }

    out.truncate(config.location_limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Area, City, Province};
    use crate::text::MatchMode;

    fn jakarta() -> Geography {
        Geography::new(
            vec![
                Province::new("31", "DKI Jakarta"),
                Province::new("32", "Jawa Barat"),
            ],
            vec![
                City::new("3174", "Jakarta Selatan", "Kota"),
                City::new("3273", "Bandung", "Kota"),
            ],
            vec![
                Area::new("317404", "Kebayoran Baru"),
                Area::new("317405", "Kebayoran Lama"),
            ],
        )
    }

    fn selected() -> LocationContext {
        LocationContext::new(Some("31".into()), Some("3174".into()))
    }

    #[test]
    fn short_queries_match_nothing() {
        let geo = jakarta();
        assert!(get_location_suggestions("a", &geo, &selected()).is_empty());
        assert!(get_location_suggestions("", &geo, &selected()).is_empty());
        assert!(get_location_suggestions("  j  ", &geo, &selected()).is_empty());
    }

    #[test]
    fn province_match_renders_bare_name() {
        let geo = Geography::new(vec![Province::new("31", "DKI Jakarta")], vec![], vec![]);
        let out = get_location_suggestions("jakarta", &geo, &LocationContext::default());
        assert_eq!(out, vec!["DKI Jakarta"]);
    }

    #[test]
    fn levels_are_emitted_province_city_area() {
        let out = get_location_suggestions("JAKARTA", &jakarta(), &selected());
        assert_eq!(out, vec!["DKI Jakarta", "Jakarta Selatan, DKI Jakarta"]);

        let out = get_location_suggestions(" kebayoran ", &jakarta(), &selected());
        assert_eq!(
            out,
            vec![
                "Kebayoran Baru, Jakarta Selatan, DKI Jakarta",
                "Kebayoran Lama, Jakarta Selatan, DKI Jakarta",
            ]
        );
    }

    #[test]
    fn labels_follow_selection_not_real_parent() {
        // Bandung is in Jawa Barat, but DKI Jakarta is selected.
        let out = get_location_suggestions("bandung", &jakarta(), &selected());
        assert_eq!(out, vec!["Bandung, DKI Jakarta"]);
    }

    #[test]
    fn missing_selection_renders_empty_parents() {
        let out = get_location_suggestions("baru", &jakarta(), &LocationContext::default());
        assert_eq!(out, vec!["Kebayoran Baru, , "]);

        let unknown = LocationContext::new(Some("99".into()), None);
        let out = get_location_suggestions("selatan", &jakarta(), &unknown);
        assert_eq!(out, vec!["Jakarta Selatan, "]);
    }

    #[test]
    fn results_are_capped_at_five() {
        let provinces = (0..10)
            .map(|i| Province::new(i.to_string(), format!("Test Province {i}")))
            .collect();
        let geo = Geography::new(provinces, vec![], vec![]);
        let out = get_location_suggestions("test", &geo, &LocationContext::default());
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], "Test Province 0");
        assert_eq!(out[4], "Test Province 4");
    }

    #[test]
    fn folded_mode_ignores_accents() {
        let geo = Geography::new(vec![], vec![], vec![Area::new("1", "Cilandak Timur")]);
        let accented = Geography::new(vec![], vec![], vec![Area::new("1", "Côte Ouest")]);
        let folded = SuggestConfig {
            match_mode: MatchMode::Folded,
            ..SuggestConfig::default()
        };
        let ctx = LocationContext::default();
        assert_eq!(
            get_location_suggestions_with("timur", &geo, &ctx, &folded).len(),
            1
        );
        assert!(get_location_suggestions("cote", &accented, &ctx).is_empty());
        assert_eq!(
            get_location_suggestions_with("cote", &accented, &ctx, &folded).len(),
            1
        );
    }
}
