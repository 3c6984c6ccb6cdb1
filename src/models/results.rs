use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::WeightConfig;

/// The five per-field sub-scores, each independently rounded to 0-100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub location: u32,
    pub price: u32,
    pub features: u32,
    #[serde(rename = "propertyType")]
    pub property_type: u32,
    pub timing: u32,
}

/// Weighted compatibility of one (listing, request) pair. Created fresh
/// per pair; the weights used are echoed back for display.
///
/// `overall_score` is normally 0-100 but is not clamped: weights summing
/// above 1.0 push it higher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    #[serde(rename = "overallScore")]
    pub overall_score: u32,
    pub details: ScoreDetails,
    pub weights: WeightConfig,
}

/// A candidate together with its compatibility against the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch<C> {
    pub candidate: C,
    pub compatibility: CompatibilityResult,
}

/// Qualitative band for a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    VeryGood,
    Good,
    Medium,
    Low,
    Weak,
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::VeryGood => "Very Good",
            QualityLabel::Good => "Good",
            QualityLabel::Medium => "Medium",
            QualityLabel::Low => "Low",
            QualityLabel::Weak => "Weak",
        };
        write!(f, "{}", label)
    }
}

/// Aggregates over a ranked candidate set, for summary dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct MatchingStats<C> {
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "averageScore")]
    pub average_score: u32,
    /// Decile buckets "0-9" through "90-99"; scores of 100 or more count
    /// into "90-99". Only non-empty buckets are present.
    #[serde(rename = "scoreDistribution")]
    pub score_distribution: BTreeMap<String, usize>,
    /// Up to five candidates scoring 80 or higher, best first.
    #[serde(rename = "topMatches")]
    pub top_matches: Vec<RankedMatch<C>>,
}
