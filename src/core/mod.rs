// Core algorithm exports
pub mod compatibility;
pub mod criteria;
pub mod distance;
pub mod polygon;
pub mod ranking;
pub mod scoring;

pub use compatibility::{features_compatibility, price_compatibility, DEFAULT_PRICE_TOLERANCE_PCT};
pub use criteria::{filter_by_criteria, matches, normalize_heating, normalize_occupancy};
pub use distance::{distance_km, haversine_distance};
pub use polygon::{filter_by_polygon, point_in_polygon};
pub use ranking::{
    filter_by_min_score, matching_stats, quality_label, rank_by_compatibility, suggest_matches,
    DEFAULT_MIN_SCORE,
};
pub use scoring::{score_compatibility, NEUTRAL_SCORE};
