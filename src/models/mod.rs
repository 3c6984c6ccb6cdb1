// Model exports
pub mod de;
pub mod domain;
pub mod filters;
pub mod results;

pub use domain::{GeoPoint, Listing, MatchAttributes, Request, WeightConfig};
pub use filters::{FilterSpec, ListingType, MatchPreferences, Range};
pub use results::{CompatibilityResult, MatchingStats, QualityLabel, RankedMatch, ScoreDetails};
