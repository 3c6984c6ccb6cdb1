//! Emlak Match - compatibility matching and map-area filtering engine for
//! real-estate listings.
//!
//! This library pairs supply-side listings ("portfolios") against
//! demand-side requests, producing deterministic 0-100 compatibility
//! scores, ranked suggestion lists, and boolean filter results for list
//! and map views. Every function is a pure computation over its inputs:
//! no I/O, no shared state, no errors in the normal path — missing data
//! degrades to neutral scores or empty result sets.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    filter_by_criteria, filter_by_polygon, quality_label, rank_by_compatibility,
    score_compatibility, suggest_matches,
};
pub use crate::models::{
    CompatibilityResult, FilterSpec, GeoPoint, Listing, MatchPreferences, QualityLabel,
    RankedMatch, Request, WeightConfig,
};
