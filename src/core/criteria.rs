//! Structured multi-field listing filter.
//!
//! `matches` is a total predicate: absent numeric fields coerce to 0,
//! absent strings to empty, so it never fails — a listing either passes
//! or it doesn't. Checks run in a fixed order and short-circuit on the
//! first failure.

use tracing::debug;

use crate::models::filters::turkish_lowercase;
use crate::models::{FilterSpec, Listing};

/// Heating keyword table, checked in order. First keyword contained in
/// the lowercased raw value wins; unmapped values pass through lowercased
/// so they stay comparable.
const HEATING_KEYWORDS: &[(&str, &str)] = &[
    ("doğalgaz", "doğalgaz"),
    ("dogalgaz", "doğalgaz"),
    ("kombi", "doğalgaz"),
    ("merkez", "merkezi"),
    ("elektr", "elektrik"),
    ("soba", "soba"),
    ("katı", "katı yakıt"),
    ("kati", "katı yakıt"),
    ("klima", "klima"),
    ("yok", "yok"),
];

/// Map a raw heating description to its canonical form.
pub fn normalize_heating(raw: &str) -> String {
    let lowered = turkish_lowercase(raw.trim());
    if lowered.is_empty() {
        return "yok".to_string();
    }

    for (keyword, canonical) in HEATING_KEYWORDS {
        if lowered.contains(keyword) {
            return (*canonical).to_string();
        }
    }

    lowered
}

/// Map a raw occupancy-permit description to its canonical form.
///
/// "iskansız" is checked before "iskanlı": the absence spelling contains
/// the shared stem, so order matters.
pub fn normalize_occupancy(raw: &str) -> String {
    let lowered = turkish_lowercase(raw.trim());

    if lowered.contains("inşaat") || lowered.contains("insaat") || lowered.contains("yapım") {
        return "inşaat aşamasında".to_string();
    }
    if lowered.contains("iskansız")
        || lowered.contains("iskansiz")
        || (lowered.contains("iskan") && lowered.contains("yok"))
    {
        return "iskansız".to_string();
    }
    if lowered.contains("iskanlı")
        || lowered.contains("iskanli")
        || (lowered.contains("iskan") && lowered.contains("var"))
    {
        return "iskanlı".to_string();
    }

    lowered
}

/// Property types that carry the detailed (area/rooms/amenity/...) fields.
fn has_detailed_fields(property_type: &str) -> bool {
    property_type == "Apartment" || property_type == "Villa"
}

/// Evaluate a single listing against a filter specification.
pub fn matches(listing: &Listing, spec: &FilterSpec) -> bool {
    // 1. Price, missing treated as 0.
    if let Some(range) = spec.price_range {
        let price = if listing.price.is_finite() { listing.price } else { 0.0 };
        if !range.contains(price) {
            return false;
        }
    }

    // 2. Listing type: explicit field or inferred from status text. A
    // listing whose type can't be determined fails the check.
    if let Some(wanted) = spec.listing_type {
        match listing.effective_listing_type() {
            Some(actual) if actual == wanted => {}
            _ => return false,
        }
    }

    // 3. Property type, exact match.
    if let Some(wanted) = &spec.property_type {
        if &listing.property_type != wanted {
            return false;
        }
    }

    // 4. Detailed criteria only apply to apartment/villa filters.
    let detailed = spec
        .property_type
        .as_deref()
        .map(has_detailed_fields)
        .unwrap_or(false);
    if detailed && !matches_detailed(listing, spec) {
        return false;
    }

    true
}

fn matches_detailed(listing: &Listing, spec: &FilterSpec) -> bool {
    if let Some(range) = spec.area_range {
        if !range.contains(listing.effective_area().unwrap_or(0.0)) {
            return false;
        }
    }

    if let Some(whitelist) = &spec.rooms_whitelist {
        let rooms = listing.effective_rooms().unwrap_or(0.0) as i64;
        if !whitelist.contains(&rooms) {
            return false;
        }
    }

    if let Some(range) = spec.building_age_range {
        if !range.contains(listing.building_age.unwrap_or(0.0)) {
            return false;
        }
    }

    if let Some(range) = spec.floor_number_range {
        if !range.contains(listing.effective_floor().unwrap_or(0.0)) {
            return false;
        }
    }

    if let Some(range) = spec.total_floors_range {
        if !range.contains(listing.total_floors.unwrap_or(0.0)) {
            return false;
        }
    }

    // Amenity requirements.
    if spec.require_parental_bathroom && !listing.parental_bathroom {
        return false;
    }
    if spec.require_exchange && !listing.exchange_accepted {
        return false;
    }
    if spec.require_parking && !listing.parking {
        return false;
    }
    if spec.require_glass_balcony && !listing.glass_balcony {
        return false;
    }
    if spec.require_dressing_room && !listing.dressing_room {
        return false;
    }
    if spec.require_furnished && !listing.furnished {
        return false;
    }

    // Categorical requirements.
    if let Some(wanted) = &spec.kitchen_type {
        if &listing.kitchen_type != wanted {
            return false;
        }
    }
    if let Some(wanted) = &spec.usage_status {
        if &listing.usage_status != wanted {
            return false;
        }
    }
    if let Some(wanted) = &spec.title_deed_status {
        if listing.effective_title_deed() != wanted {
            return false;
        }
    }
    if let Some(wanted) = &spec.bathroom_count {
        if &listing.bathroom_count != wanted {
            return false;
        }
    }
    if let Some(wanted) = &spec.balcony_count {
        if &listing.balcony_count != wanted {
            return false;
        }
    }

    // Normalized categorical comparisons.
    if let Some(wanted) = &spec.heating_type {
        if normalize_heating(&listing.heating_type) != normalize_heating(wanted) {
            return false;
        }
    }
    if let Some(wanted) = &spec.occupancy_status {
        if normalize_occupancy(listing.effective_occupancy()) != normalize_occupancy(wanted) {
            return false;
        }
    }

    true
}

/// Apply [`matches`] to a listing collection.
pub fn filter_by_criteria(listings: Vec<Listing>, spec: &FilterSpec) -> Vec<Listing> {
    let total = listings.len();
    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| matches(listing, spec))
        .collect();

    debug!(total, kept = kept.len(), "criteria filter applied");
    kept
}
