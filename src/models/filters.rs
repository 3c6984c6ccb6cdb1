use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Lowercasing that respects the Turkish dotted/dotless I. The std
/// mapping turns 'İ' into "i\u{307}" (combining dot above), which breaks
/// plain substring matching against keyword tables.
pub(crate) fn turkish_lowercase(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            'İ' => vec!['i'],
            'I' => vec!['ı'],
            _ => c.to_lowercase().collect(),
        })
        .collect()
}

/// Sale vs. rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    /// Infer the listing type from a free-text status string. The source
    /// data carries Turkish labels with both dotted and dotless spellings,
    /// plus the occasional English export.
    pub fn from_status(status: &str) -> Option<Self> {
        let status = turkish_lowercase(status);
        const SALE: [&str; 3] = ["satılık", "satilik", "sale"];
        const RENT: [&str; 3] = ["kiralık", "kiralik", "rent"];

        if SALE.iter().any(|kw| status.contains(kw)) {
            Some(ListingType::Sale)
        } else if RENT.iter().any(|kw| status.contains(kw)) {
            Some(ListingType::Rent)
        } else {
            None
        }
    }
}

/// Inclusive numeric range. Ordering (`min <= max`) is the caller's
/// responsibility and is not re-validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Structured multi-field filter. Every field is optional; absent means
/// "no constraint". The detailed fields below `property_type` only apply
/// when the filter targets apartments or villas (see `core::criteria`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<Range>,
    #[serde(rename = "listingType", default)]
    pub listing_type: Option<ListingType>,
    #[serde(rename = "propertyType", default)]
    pub property_type: Option<String>,

    #[serde(rename = "areaRange", default)]
    pub area_range: Option<Range>,
    #[serde(rename = "roomsWhitelist", default)]
    pub rooms_whitelist: Option<HashSet<i64>>,
    #[serde(rename = "buildingAgeRange", default)]
    pub building_age_range: Option<Range>,
    #[serde(rename = "floorNumberRange", default)]
    pub floor_number_range: Option<Range>,
    #[serde(rename = "totalFloorsRange", default)]
    pub total_floors_range: Option<Range>,

    // Requirement flags: true = the listing must have the amenity.
    #[serde(rename = "requireParentalBathroom", default)]
    pub require_parental_bathroom: bool,
    #[serde(rename = "requireExchange", default)]
    pub require_exchange: bool,
    #[serde(rename = "requireParking", default)]
    pub require_parking: bool,
    #[serde(rename = "requireGlassBalcony", default)]
    pub require_glass_balcony: bool,
    #[serde(rename = "requireDressingRoom", default)]
    pub require_dressing_room: bool,
    #[serde(rename = "requireFurnished", default)]
    pub require_furnished: bool,

    // Categorical requirements: exact match, except heating and occupancy
    // which are compared after keyword normalization.
    #[serde(rename = "kitchenType", default)]
    pub kitchen_type: Option<String>,
    #[serde(rename = "usageStatus", default)]
    pub usage_status: Option<String>,
    #[serde(rename = "titleDeedStatus", default)]
    pub title_deed_status: Option<String>,
    #[serde(rename = "bathroomCount", default)]
    pub bathroom_count: Option<String>,
    #[serde(rename = "balconyCount", default)]
    pub balcony_count: Option<String>,
    #[serde(rename = "heatingType", default)]
    pub heating_type: Option<String>,
    #[serde(rename = "occupancyStatus", default)]
    pub occupancy_status: Option<String>,
}

/// Knobs for the suggestion pipeline (`core::ranking::suggest_matches`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: usize,
    #[serde(rename = "minCompatibilityScore", default)]
    pub min_compatibility_score: Option<u32>,
    #[serde(rename = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
    #[serde(rename = "minPrice", default)]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
}

fn default_max_results() -> usize {
    20
}

impl Default for MatchPreferences {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            min_compatibility_score: None,
            max_distance_km: None,
            min_price: None,
            max_price: None,
        }
    }
}
