// Integration tests for Emlak Match

use emlak_match::core::{
    filter_by_criteria, filter_by_polygon, filter_by_min_score, matching_stats, quality_label,
    rank_by_compatibility, suggest_matches,
};
use emlak_match::models::{
    FilterSpec, GeoPoint, Listing, MatchPreferences, QualityLabel, Range, Request, WeightConfig,
};

fn make_listing(id: &str, price: f64, lat: f64, lng: f64, features: &[&str]) -> Listing {
    let mut listing: Listing = serde_json::from_str(&format!(
        r#"{{"id": "{}", "price": {}, "propertyType": "Apartment"}}"#,
        id, price
    ))
    .unwrap();
    listing.coordinates = Some(GeoPoint::new(lat, lng));
    listing.features = features.iter().map(|s| s.to_string()).collect();
    listing
}

fn make_request(price: f64, lat: f64, lng: f64, features: &[&str]) -> Request {
    Request {
        id: "request".to_string(),
        price,
        property_type: "Apartment".to_string(),
        features: features.iter().map(|s| s.to_string()).collect(),
        coordinates: Some(GeoPoint::new(lat, lng)),
        available_from: None,
    }
}

#[test]
fn test_end_to_end_scoring_scenario() {
    // Target: 1,000,000 at (41.0, 29.0) with three wanted features.
    let request = make_request(1_000_000.0, 41.0, 29.0, &["parking", "balcony", "garden"]);

    // Candidate: 1,050,000, same spot, all three features, same type,
    // no availability dates on either side.
    let listing = make_listing("a", 1_050_000.0, 41.0, 29.0, &["parking", "balcony", "garden"]);

    let ranked = rank_by_compatibility(&request, vec![listing], &WeightConfig::default());
    let result = &ranked[0].compatibility;

    assert_eq!(result.details.location, 100);
    assert_eq!(result.details.price, 95);
    assert_eq!(result.details.features, 100);
    assert_eq!(result.details.property_type, 100);
    assert_eq!(result.details.timing, 50);

    // round(100*.30 + 95*.25 + 100*.20 + 100*.15 + 50*.10) = 94
    assert_eq!(result.overall_score, 94);
    assert_eq!(quality_label(result.overall_score), QualityLabel::Excellent);
}

#[test]
fn test_ranking_order_and_min_score() {
    let request = make_request(1_000_000.0, 41.0, 29.0, &["parking", "balcony", "garden"]);

    let strong = make_listing("strong", 1_050_000.0, 41.0, 29.0, &["parking", "balcony", "garden"]);
    let medium = make_listing("medium", 1_200_000.0, 41.03, 29.03, &["parking", "balcony"]);
    let weak = make_listing("weak", 4_000_000.0, 39.9, 32.8, &["pool"]);

    // Deliberately out of order on input.
    let ranked = rank_by_compatibility(
        &request,
        vec![weak, strong, medium],
        &WeightConfig::default(),
    );

    let ids: Vec<&str> = ranked.iter().map(|m| m.candidate.id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "medium", "weak"]);

    let scores: Vec<u32> = ranked
        .iter()
        .map(|m| m.compatibility.overall_score)
        .collect();
    assert!(scores[0] >= 90);
    assert!(scores[1] >= 70 && scores[1] < scores[0]);
    assert!(scores[2] < 70);

    let kept = filter_by_min_score(ranked, 70);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].candidate.id, "strong");
    assert_eq!(kept[1].candidate.id, "medium");
}

#[test]
fn test_suggest_pipeline_stage_order() {
    let request = make_request(1_000_000.0, 41.0, 29.0, &["parking"]);

    // "near_weak" (~50) survives the distance filter but not the score
    // filter; "far_strong" (~65) is the other way around. Truncation
    // happens last.
    let mut candidates = vec![
        make_listing("near_weak", 9_000_000.0, 41.001, 29.001, &["pool"]),
        make_listing("far_strong", 1_000_000.0, 42.0, 30.0, &["parking"]),
    ];
    for i in 0..30 {
        candidates.push(make_listing(
            &format!("good_{}", i),
            1_000_000.0,
            41.001,
            29.001,
            &["parking"],
        ));
    }

    let prefs = MatchPreferences {
        max_results: 10,
        min_compatibility_score: Some(60),
        max_distance_km: Some(5.0),
        min_price: Some(500_000.0),
        max_price: Some(2_000_000.0),
    };

    let suggested = suggest_matches(&request, candidates, &prefs, &WeightConfig::default());

    assert_eq!(suggested.len(), 10);
    assert!(suggested
        .iter()
        .all(|m| m.compatibility.overall_score >= 60));
    assert!(suggested.iter().all(|m| m.candidate.id.starts_with("good_")));
}

#[test]
fn test_criteria_and_polygon_filters_compose() {
    // Bosphorus-ish rectangle: lng 28.9..29.1, lat 40.9..41.1
    let polygon = [[28.9, 40.9], [28.9, 41.1], [29.1, 41.1], [29.1, 40.9]];

    let inside_cheap = make_listing("inside_cheap", 800_000.0, 41.0, 29.0, &[]);
    let inside_expensive = make_listing("inside_expensive", 5_000_000.0, 41.05, 29.05, &[]);
    let outside = make_listing("outside", 800_000.0, 39.9, 32.8, &[]);

    let spec = FilterSpec {
        price_range: Some(Range::new(0.0, 1_000_000.0)),
        ..Default::default()
    };

    // Logical AND: criteria first, polygon second.
    let by_criteria = filter_by_criteria(
        vec![inside_cheap, inside_expensive, outside],
        &spec,
    );
    let by_both = filter_by_polygon(by_criteria, &polygon);

    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].id, "inside_cheap");
}

#[test]
fn test_document_store_payload_roundtrip() {
    // A realistic document-store payload: string numerics, 0/1 flags,
    // unknown extra fields.
    let listings: Vec<Listing> = serde_json::from_str(
        r#"[
            {
                "id": "doc-1",
                "price": "1450000",
                "propertyType": "Apartment",
                "status": "SATILIK",
                "grossArea": "150",
                "rooms": "3",
                "parking": 1,
                "heatingType": "Kombi Doğalgaz",
                "coordinates": {"latitude": 41.02, "longitude": 29.01},
                "agentNote": "ignored by the engine"
            },
            {
                "id": "doc-2",
                "price": null,
                "propertyType": "Land",
                "coordinates": {"latitude": "garbage", "longitude": 29.0}
            }
        ]"#,
    )
    .unwrap();

    assert_eq!(listings[0].price, 1_450_000.0);
    assert_eq!(listings[0].effective_area(), Some(150.0));
    assert!(listings[0].parking);

    // doc-2's broken latitude makes its coordinates invalid, so the
    // polygon filter drops it rather than placing it at (0, 0).
    assert_eq!(listings[1].price, 0.0);
    assert!(!listings[1].coordinates.unwrap().is_valid());

    let polygon = [[28.9, 40.9], [28.9, 41.1], [29.1, 41.1], [29.1, 40.9]];
    let kept = filter_by_polygon(listings, &polygon);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "doc-1");
}

#[test]
fn test_stats_distribution_and_overflow_bucket() {
    let request = make_request(1_000_000.0, 41.0, 29.0, &["parking"]);
    let candidates = vec![
        make_listing("a", 1_000_000.0, 41.0, 29.0, &["parking"]),
        make_listing("b", 4_000_000.0, 39.9, 32.8, &["pool"]),
    ];

    // Weights summing past 1.0 push the best score over 100; the stats
    // bucketing must clamp it into "90-99" instead of inventing a bucket.
    let heavy = WeightConfig {
        location: 0.5,
        price: 0.5,
        features: 0.5,
        property_type: 0.5,
        timing: 0.5,
    };

    let ranked = rank_by_compatibility(&request, candidates, &heavy);
    assert!(ranked[0].compatibility.overall_score > 100);

    let stats = matching_stats(&ranked);
    assert_eq!(stats.total_count, 2);
    assert_eq!(stats.score_distribution.values().sum::<usize>(), 2);
    assert!(stats.score_distribution.contains_key("90-99"));
    assert_eq!(stats.top_matches[0].candidate.id, "a");
}

#[test]
fn test_listing_can_be_ranked_against_requests() {
    // The symmetric direction: one listing, many demand records.
    let listing = make_listing("supply", 2_000_000.0, 41.0, 29.0, &["parking", "balcony"]);

    let requests = vec![
        make_request(2_000_000.0, 41.0, 29.0, &["parking", "balcony"]),
        make_request(500_000.0, 39.9, 32.8, &["garden"]),
    ];

    let ranked = rank_by_compatibility(&listing, requests, &WeightConfig::default());
    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].compatibility.overall_score > ranked[1].compatibility.overall_score);
    assert_eq!(ranked[0].candidate.price, 2_000_000.0);
}
