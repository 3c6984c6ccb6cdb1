//! Free-form map-area (polygon) filtering.
//!
//! Vertices are `[longitude, latitude]` pairs, the polygon is implicitly
//! closed (the last vertex connects back to the first).

use tracing::debug;

use crate::models::Listing;

/// Ray-casting (even-odd rule) point-in-polygon test.
///
/// A horizontal ray is cast from the point; each edge crossing toggles
/// the inside flag. Edges with equal y-coordinates are skipped so
/// degenerate geometry never divides by zero.
pub fn point_in_polygon(point: [f64; 2], polygon: &[[f64; 2]]) -> bool {
    let (x, y) = (point[0], point[1]);
    let mut inside = false;

    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i][0], polygon[i][1]);
        let (xj, yj) = (polygon[j][0], polygon[j][1]);

        if yi != yj {
            let crosses = (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi;
            if crosses {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Keep the listings whose coordinates fall inside the polygon.
///
/// A polygon with fewer than three vertices matches nothing; listings
/// without valid numeric coordinates are excluded.
pub fn filter_by_polygon(listings: Vec<Listing>, polygon: &[[f64; 2]]) -> Vec<Listing> {
    if polygon.len() < 3 {
        debug!(vertices = polygon.len(), "degenerate polygon, nothing matches");
        return Vec::new();
    }

    let total = listings.len();
    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| match listing.coordinates {
            Some(point) if point.is_valid() => {
                point_in_polygon([point.longitude, point.latitude], polygon)
            }
            _ => false,
        })
        .collect();

    debug!(total, kept = kept.len(), "polygon filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    const UNIT_SQUARE: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

    fn listing_at(id: &str, lat: f64, lng: f64) -> Listing {
        let mut listing: Listing =
            serde_json::from_str(&format!(r#"{{"id": "{}"}}"#, id)).unwrap();
        listing.coordinates = Some(GeoPoint::new(lat, lng));
        listing
    }

    #[test]
    fn test_point_inside_unit_square() {
        assert!(point_in_polygon([0.5, 0.5], &UNIT_SQUARE));
    }

    #[test]
    fn test_point_outside_unit_square() {
        assert!(!point_in_polygon([2.0, 2.0], &UNIT_SQUARE));
        assert!(!point_in_polygon([-0.1, 0.5], &UNIT_SQUARE));
    }

    #[test]
    fn test_two_vertex_polygon_never_matches() {
        let segment = [[0.0, 0.0], [1.0, 1.0]];
        assert!(!point_in_polygon([0.5, 0.5], &segment));
    }

    #[test]
    fn test_degenerate_horizontal_edges_are_skipped() {
        // Duplicate vertices create zero-height edges.
        let polygon = [[0.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [1.0, 0.0]];
        assert!(point_in_polygon([0.5, 0.5], &polygon));
    }

    #[test]
    fn test_concave_polygon() {
        // L-shape: the notch at the top right is outside.
        let l_shape = [
            [0.0, 0.0],
            [0.0, 2.0],
            [1.0, 2.0],
            [1.0, 1.0],
            [2.0, 1.0],
            [2.0, 0.0],
        ];
        assert!(point_in_polygon([0.5, 1.5], &l_shape));
        assert!(!point_in_polygon([1.5, 1.5], &l_shape));
        assert!(point_in_polygon([1.5, 0.5], &l_shape));
    }

    #[test]
    fn test_filter_by_polygon() {
        let listings = vec![
            listing_at("in", 0.5, 0.5),
            listing_at("out", 2.0, 2.0),
            listing_at("nan", f64::NAN, 0.5),
        ];

        let mut unlocated: Listing = serde_json::from_str(r#"{"id": "none"}"#).unwrap();
        unlocated.coordinates = None;
        let mut listings = listings;
        listings.push(unlocated);

        let kept = filter_by_polygon(listings, &UNIT_SQUARE);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "in");
    }

    #[test]
    fn test_filter_rejects_degenerate_polygon() {
        let listings = vec![listing_at("in", 0.5, 0.5)];
        assert!(filter_by_polygon(listings.clone(), &[[0.0, 0.0], [1.0, 1.0]]).is_empty());
        assert!(filter_by_polygon(listings, &[]).is_empty());
    }
}
