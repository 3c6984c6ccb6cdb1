use std::collections::BTreeMap;

use tracing::debug;

use crate::core::distance::distance_km;
use crate::core::scoring::score_compatibility;
use crate::models::{
    MatchAttributes, MatchPreferences, MatchingStats, QualityLabel, RankedMatch, WeightConfig,
};

/// Default minimum overall score a match must reach to be kept.
pub const DEFAULT_MIN_SCORE: u32 = 70;

/// Score every candidate against the target and sort descending by
/// overall score.
pub fn rank_by_compatibility<T, C>(
    target: &T,
    candidates: Vec<C>,
    weights: &WeightConfig,
) -> Vec<RankedMatch<C>>
where
    T: MatchAttributes + ?Sized,
    C: MatchAttributes,
{
    let mut ranked: Vec<RankedMatch<C>> = candidates
        .into_iter()
        .map(|candidate| {
            let compatibility = score_compatibility(&candidate, target, weights);
            RankedMatch {
                candidate,
                compatibility,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.compatibility.overall_score.cmp(&a.compatibility.overall_score));
    ranked
}

/// Keep only matches at or above `min_score`.
pub fn filter_by_min_score<C>(
    ranked: Vec<RankedMatch<C>>,
    min_score: u32,
) -> Vec<RankedMatch<C>> {
    ranked
        .into_iter()
        .filter(|m| m.compatibility.overall_score >= min_score)
        .collect()
}

/// Qualitative band for a score; thresholds checked in descending order.
pub fn quality_label(score: u32) -> QualityLabel {
    if score >= 90 {
        QualityLabel::Excellent
    } else if score >= 80 {
        QualityLabel::VeryGood
    } else if score >= 70 {
        QualityLabel::Good
    } else if score >= 60 {
        QualityLabel::Medium
    } else if score >= 50 {
        QualityLabel::Low
    } else {
        QualityLabel::Weak
    }
}

/// The full suggestion pipeline: rank, then apply the optional filters in
/// a fixed order, then truncate.
///
/// Stage order matters for what survives truncation:
/// 1. minimum compatibility score
/// 2. maximum distance from the target
/// 3. price bounds
/// 4. truncate to `max_results`
///
/// Candidates lacking coordinates or a price are never dropped by stages
/// 2-3: absence of data is not treated as a violation.
pub fn suggest_matches<T, C>(
    target: &T,
    candidates: Vec<C>,
    preferences: &MatchPreferences,
    weights: &WeightConfig,
) -> Vec<RankedMatch<C>>
where
    T: MatchAttributes + ?Sized,
    C: MatchAttributes,
{
    let total = candidates.len();
    let mut ranked = rank_by_compatibility(target, candidates, weights);

    if let Some(min_score) = preferences.min_compatibility_score {
        ranked = filter_by_min_score(ranked, min_score);
    }

    if let Some(max_distance) = preferences.max_distance_km {
        ranked.retain(|m| match (target.coordinates(), m.candidate.coordinates()) {
            (Some(a), Some(b)) => {
                let d = distance_km(a, b);
                // Undefined distance (infinity) means "can't measure",
                // which does not disqualify the candidate.
                !d.is_finite() || d <= max_distance
            }
            _ => true,
        });
    }

    if preferences.min_price.is_some() || preferences.max_price.is_some() {
        ranked.retain(|m| {
            let price = m.candidate.price();
            if price <= 0.0 {
                return true;
            }
            preferences.min_price.map_or(true, |min| price >= min)
                && preferences.max_price.map_or(true, |max| price <= max)
        });
    }

    ranked.truncate(preferences.max_results);

    debug!(
        total_candidates = total,
        suggested = ranked.len(),
        max_results = preferences.max_results,
        "suggestion pipeline complete"
    );

    ranked
}

/// Summary aggregates over a ranked candidate set.
pub fn matching_stats<C: Clone>(ranked: &[RankedMatch<C>]) -> MatchingStats<C> {
    let total_count = ranked.len();

    let average_score = if total_count == 0 {
        0
    } else {
        let sum: u64 = ranked
            .iter()
            .map(|m| m.compatibility.overall_score as u64)
            .sum();
        (sum as f64 / total_count as f64).round() as u32
    };

    let mut score_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for m in ranked {
        // Scores of 100+ land in the top bucket.
        let bucket = (m.compatibility.overall_score / 10).min(9);
        let label = format!("{}-{}", bucket * 10, bucket * 10 + 9);
        *score_distribution.entry(label).or_insert(0) += 1;
    }

    let top_matches: Vec<RankedMatch<C>> = ranked
        .iter()
        .filter(|m| m.compatibility.overall_score >= 80)
        .take(5)
        .cloned()
        .collect();

    MatchingStats {
        total_count,
        average_score,
        score_distribution,
        top_matches,
    }
}
