use crate::core::compatibility::{
    features_compatibility, price_compatibility, DEFAULT_PRICE_TOLERANCE_PCT,
};
use crate::core::distance::distance_km;
use crate::models::{CompatibilityResult, MatchAttributes, ScoreDetails, WeightConfig};

/// Sub-score used when a field can't be compared for lack of data:
/// deliberately neither rewards nor penalizes.
pub const NEUTRAL_SCORE: u32 = 50;

/// Compute the weighted compatibility of a (listing, request) pair.
///
/// Scoring formula:
/// ```text
/// overall = round(
///     location * 0.30 +      # 100 at same spot, 0 at >= 10 km apart
///     price    * 0.25 +      # tolerance-band comparison
///     features * 0.20 +      # feature-set overlap
///     type     * 0.15 +      # exact property-type match
///     timing   * 0.10        # availability dates, 1 point per day apart
/// )
/// ```
/// (defaults shown; any non-negative weights are accepted as-is)
///
/// Missing optional fields degrade to the neutral 50 instead of failing,
/// so this function is total over any pair of records.
pub fn score_compatibility<L, R>(
    listing: &L,
    request: &R,
    weights: &WeightConfig,
) -> CompatibilityResult
where
    L: MatchAttributes + ?Sized,
    R: MatchAttributes + ?Sized,
{
    let location = match (listing.coordinates(), request.coordinates()) {
        (Some(a), Some(b)) => {
            // Infinity (undefined distance) falls through to 0 here.
            let d = distance_km(a, b);
            (100.0 - d * 10.0).max(0.0).round() as u32
        }
        _ => NEUTRAL_SCORE,
    };

    let price = price_compatibility(listing.price(), request.price(), DEFAULT_PRICE_TOLERANCE_PCT);

    let features = features_compatibility(listing.features(), request.features());

    // Binary: exact, case-sensitive match or nothing.
    let property_type = if listing.property_type() == request.property_type() {
        100
    } else {
        0
    };

    let timing = match (listing.available_from(), request.available_from()) {
        (Some(d1), Some(d2)) => {
            let days = (d1 - d2).num_days().abs();
            (100 - days).max(0) as u32
        }
        _ => NEUTRAL_SCORE,
    };

    let details = ScoreDetails {
        location,
        price,
        features,
        property_type,
        timing,
    };

    // Raw weighted sum, rounded once. Not clamped: weights summing above
    // 1.0 can push the overall past 100.
    let overall_score = (location as f64 * weights.location
        + price as f64 * weights.price
        + features as f64 * weights.features
        + property_type as f64 * weights.property_type
        + timing as f64 * weights.timing)
        .round() as u32;

    CompatibilityResult {
        overall_score,
        details,
        weights: *weights,
    }
}
