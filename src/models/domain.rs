use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::{lenient_bool, lenient_coord, lenient_f64, lenient_opt_f64, lenient_string};
use super::filters::ListingType;

/// A latitude/longitude pair in degrees.
///
/// Coordinates deserialize leniently: a non-numeric value becomes NaN,
/// which downstream distance math treats as "undefined", never as (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default = "nan", deserialize_with = "lenient_coord")]
    pub latitude: f64,
    #[serde(default = "nan", deserialize_with = "lenient_coord")]
    pub longitude: f64,
}

fn nan() -> f64 {
    f64::NAN
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are real numbers (range is deliberately not checked).
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A supply-side real-estate record (a portfolio entry).
///
/// All numeric fields tolerate string-typed source values; absent numerics
/// coerce to 0 or `None` depending on whether absence is meaningful for
/// the field (see `models::de`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(rename = "propertyType", default, deserialize_with = "lenient_string")]
    pub property_type: String,
    #[serde(rename = "listingType", default)]
    pub listing_type: Option<ListingType>,
    /// Free-text status ("Satılık", "Kiralık daire", ...) used to infer the
    /// listing type when the explicit field is missing.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,

    // Area fallback chain: gross -> standard -> net -> generic.
    #[serde(rename = "grossArea", default, deserialize_with = "lenient_opt_f64")]
    pub gross_area: Option<f64>,
    #[serde(rename = "squareMeters", default, deserialize_with = "lenient_opt_f64")]
    pub square_meters: Option<f64>,
    #[serde(rename = "netArea", default, deserialize_with = "lenient_opt_f64")]
    pub net_area: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub area: Option<f64>,

    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub rooms: Option<f64>,
    #[serde(rename = "roomCount", default, deserialize_with = "lenient_opt_f64")]
    pub room_count: Option<f64>,
    #[serde(rename = "buildingAge", default, deserialize_with = "lenient_opt_f64")]
    pub building_age: Option<f64>,
    #[serde(rename = "floorNumber", default, deserialize_with = "lenient_opt_f64")]
    pub floor_number: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub floor: Option<f64>,
    #[serde(rename = "totalFloors", default, deserialize_with = "lenient_opt_f64")]
    pub total_floors: Option<f64>,

    // Amenity flags.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub parking: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub furnished: bool,
    #[serde(rename = "glassBalcony", default, deserialize_with = "lenient_bool")]
    pub glass_balcony: bool,
    #[serde(rename = "dressingRoom", default, deserialize_with = "lenient_bool")]
    pub dressing_room: bool,
    #[serde(rename = "exchangeAccepted", default, deserialize_with = "lenient_bool")]
    pub exchange_accepted: bool,
    #[serde(rename = "parentalBathroom", default, deserialize_with = "lenient_bool")]
    pub parental_bathroom: bool,

    // Categorical attributes.
    #[serde(rename = "kitchenType", default, deserialize_with = "lenient_string")]
    pub kitchen_type: String,
    #[serde(rename = "usageStatus", default, deserialize_with = "lenient_string")]
    pub usage_status: String,
    #[serde(rename = "titleDeedStatus", default, deserialize_with = "lenient_string")]
    pub title_deed_status: String,
    /// Alternate source field for the title deed status.
    #[serde(rename = "deedStatus", default, deserialize_with = "lenient_string")]
    pub deed_status: String,
    #[serde(rename = "heatingType", default, deserialize_with = "lenient_string")]
    pub heating_type: String,
    #[serde(rename = "occupancyStatus", default, deserialize_with = "lenient_string")]
    pub occupancy_status: String,
    /// Alternate source field for the occupancy status.
    #[serde(default, deserialize_with = "lenient_string")]
    pub occupancy: String,
    #[serde(rename = "bathroomCount", default, deserialize_with = "lenient_string")]
    pub bathroom_count: String,
    #[serde(rename = "balconyCount", default, deserialize_with = "lenient_string")]
    pub balcony_count: String,

    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<NaiveDate>,
}

impl Listing {
    /// Explicit listing type if present, otherwise inferred from the
    /// free-text status.
    pub fn effective_listing_type(&self) -> Option<ListingType> {
        self.listing_type
            .or_else(|| ListingType::from_status(&self.status))
    }

    /// Area for range filtering: gross -> standard -> net -> generic,
    /// first non-null wins.
    pub fn effective_area(&self) -> Option<f64> {
        first_some(&[self.gross_area, self.square_meters, self.net_area, self.area])
    }

    pub fn effective_rooms(&self) -> Option<f64> {
        first_some(&[self.rooms, self.room_count])
    }

    pub fn effective_floor(&self) -> Option<f64> {
        first_some(&[self.floor_number, self.floor])
    }

    pub fn effective_title_deed(&self) -> &str {
        if self.title_deed_status.is_empty() {
            &self.deed_status
        } else {
            &self.title_deed_status
        }
    }

    pub fn effective_occupancy(&self) -> &str {
        if self.occupancy_status.is_empty() {
            &self.occupancy
        } else {
            &self.occupancy_status
        }
    }
}

/// First non-null value in an ordered fallback chain.
pub(crate) fn first_some(values: &[Option<f64>]) -> Option<f64> {
    values.iter().copied().flatten().next()
}

/// A demand-side record: what a buyer/renter is looking for. Carries the
/// same matching-relevant fields as [`Listing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(rename = "propertyType", default, deserialize_with = "lenient_string")]
    pub property_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<NaiveDate>,
}

/// The scoring-relevant view of a record. Implemented by both sides so a
/// listing can be ranked against requests and vice versa.
pub trait MatchAttributes {
    fn price(&self) -> f64;
    fn property_type(&self) -> &str;
    fn features(&self) -> &[String];
    fn coordinates(&self) -> Option<GeoPoint>;
    fn available_from(&self) -> Option<NaiveDate>;
}

impl MatchAttributes for Listing {
    fn price(&self) -> f64 {
        self.price
    }
    fn property_type(&self) -> &str {
        &self.property_type
    }
    fn features(&self) -> &[String] {
        &self.features
    }
    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
    fn available_from(&self) -> Option<NaiveDate> {
        self.available_from
    }
}

impl MatchAttributes for Request {
    fn price(&self) -> f64 {
        self.price
    }
    fn property_type(&self) -> &str {
        &self.property_type
    }
    fn features(&self) -> &[String] {
        &self.features
    }
    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
    fn available_from(&self) -> Option<NaiveDate> {
        self.available_from
    }
}

/// Weights for the five compatibility factors. Raw weighted sum is used;
/// the engine neither normalizes nor clamps, so callers should keep the
/// total at or below 1.0 for a 0-100 overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightConfig {
    pub location: f64,
    pub price: f64,
    pub features: f64,
    #[serde(rename = "propertyType")]
    pub property_type: f64,
    pub timing: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            location: 0.30,
            price: 0.25,
            features: 0.20,
            property_type: 0.15,
            timing: 0.10,
        }
    }
}
