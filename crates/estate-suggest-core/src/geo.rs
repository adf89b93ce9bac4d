// crates/estate-suggest-core/src/geo.rs

//! Administrative geography reference data.
//!
//! Three flat lists: provinces, cities (regencies and municipalities) and
//! areas (districts). Entities carry no parent links; the location matcher
//! labels matches using the caller's current selection instead, see
//! [`crate::location`].

use crate::text::NameMatch;
use serde::{Deserialize, Serialize};

/// Top level of the taxonomy, e.g. `{ code: "31", name: "DKI Jakarta" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name: String,
}

/// A city or regency, e.g. `{ code: "3174", name: "Jakarta Selatan", type: "Kota" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub code: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A district within a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub code: String,
    pub name: String,
}

impl Province {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl City {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl Area {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl NameMatch for Province {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Area {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Counts of each taxonomy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoStats {
    pub provinces: usize,
    pub cities: usize,
    pub areas: usize,
}

/// The three taxonomy lists, in the order the caller supplied them.
///
/// Order matters: location suggestions are emitted in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(default)]
    pub provinces: Vec<Province>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl Geography {
    pub fn new(provinces: Vec<Province>, cities: Vec<City>, areas: Vec<Area>) -> Self {
        Self {
            provinces,
            cities,
            areas,
        }
    }

    pub fn stats(&self) -> GeoStats {
        GeoStats {
            provinces: self.provinces.len(),
            cities: self.cities.len(),
            areas: self.areas.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.cities.is_empty() && self.areas.is_empty()
    }

    /// Exact code lookup. Lists are short, a linear scan is fine.
    pub fn find_province_by_code(&self, code: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| p.code == code)
    }

    pub fn find_city_by_code(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.code == code)
    }

    pub fn find_area_by_code(&self, code: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.code == code)
    }
}
