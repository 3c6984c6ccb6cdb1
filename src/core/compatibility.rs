//! Per-field compatibility scores.
//!
//! Each function returns an integer 0-100. Missing data never fails:
//! prices need two positive values to be comparable (otherwise 0), while
//! feature sets fall back to the neutral 50 when either side is empty.

use std::collections::HashSet;

/// Default tolerance band for price comparison, in percent.
pub const DEFAULT_PRICE_TOLERANCE_PCT: f64 = 20.0;

/// Price-band compatibility between two prices.
///
/// The difference is measured as a percentage of the mean of both prices.
/// Inside the tolerance band the score degrades linearly (100 at equal
/// prices, `100 - tolerance` at the band edge); outside it the penalty
/// doubles per extra percent, floored at 0.
pub fn price_compatibility(p1: f64, p2: f64, tolerance_pct: f64) -> u32 {
    // Price comparison is meaningless without two positive prices.
    if !p1.is_finite() || !p2.is_finite() || p1 <= 0.0 || p2 <= 0.0 {
        return 0;
    }

    let diff_pct = (p1 - p2).abs() / ((p1 + p2) / 2.0) * 100.0;

    let score = if diff_pct <= tolerance_pct {
        100.0 - diff_pct
    } else {
        (100.0 - (diff_pct - tolerance_pct) * 2.0).max(0.0)
    };

    score.round() as u32
}

/// Feature-set overlap, Jaccard-style scaled to 0-100.
///
/// An empty set on either side means insufficient information, not a
/// mismatch, so the neutral 50 is returned.
pub fn features_compatibility(f1: &[String], f2: &[String]) -> u32 {
    if f1.is_empty() || f2.is_empty() {
        return 50;
    }

    let set1: HashSet<&str> = f1.iter().map(String::as_str).collect();
    let set2: HashSet<&str> = f2.iter().map(String::as_str).collect();

    let common = set1.intersection(&set2).count();
    let union = set1.union(&set2).count();

    (common as f64 / union as f64 * 100.0).round() as u32
}
