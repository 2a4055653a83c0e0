//! Great-circle distance and the coin proximity check.

use crate::model::{Coin, GeoPosition};

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A coin counts as reachable when the user is strictly closer than this.
pub const COIN_RANGE_M: f64 = 500.0;

/// Haversine distance between two points, in meters.
pub fn haversine_distance(a: &GeoPosition, b: &GeoPosition) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Clamp guards against float drift past 1.0 for near-antipodal points.
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

pub fn is_within_range(a: &GeoPosition, b: &GeoPosition) -> bool {
    haversine_distance(a, b) < COIN_RANGE_M
}

/// First registry coin within range, in registry order. Deliberately not
/// nearest-match: ties go to the earlier entry.
pub fn first_coin_in_range<'a>(here: &GeoPosition, coins: &'a [Coin]) -> Option<&'a Coin> {
    coins.iter().find(|coin| is_within_range(here, &coin.position()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(latitude: f64, longitude: f64) -> GeoPosition {
        GeoPosition { latitude, longitude }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = pos(31.5204, 74.3587);
        assert_eq!(haversine_distance(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let lahore = pos(31.5204, 74.3587);
        let brussels = pos(50.8503, 4.3517);
        let there = haversine_distance(&lahore, &brussels);
        let back = haversine_distance(&brussels, &lahore);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn four_and_a_half_degrees_of_latitude_is_about_500_km() {
        let a = pos(0.0, 0.0);
        let b = pos(4.5, 0.0);
        let d = haversine_distance(&a, &b);
        assert!(d > 499_000.0 && d < 502_000.0, "got {} m", d);
        assert!(!is_within_range(&a, &b));
    }

    #[test]
    fn identical_points_are_in_range() {
        let a = pos(31.5204, 74.3587);
        assert!(is_within_range(&a, &a));
    }

    #[test]
    fn range_threshold_is_strict_at_500_m() {
        let a = pos(0.0, 0.0);
        // ~498 m and ~503 m north of the origin.
        assert!(is_within_range(&a, &pos(0.00448, 0.0)));
        assert!(!is_within_range(&a, &pos(0.00452, 0.0)));
    }

    #[test]
    fn first_match_wins_over_nearer_later_coins() {
        let here = pos(0.0, 0.0);
        let coins = [
            Coin { id: 1, lat: 0.003, lng: 0.0 },  // ~334 m away
            Coin { id: 2, lat: 0.0005, lng: 0.0 }, // ~56 m away, nearer
            Coin { id: 3, lat: 1.0, lng: 0.0 },    // far
        ];
        let found = first_coin_in_range(&here, &coins).expect("a coin is in range");
        assert_eq!(found.id, 1);
    }

    #[test]
    fn no_coin_in_range_yields_none() {
        let here = pos(0.0, 0.0);
        let coins = [
            Coin { id: 1, lat: 1.0, lng: 0.0 },
            Coin { id: 2, lat: 0.0, lng: 1.0 },
        ];
        assert!(first_coin_in_range(&here, &coins).is_none());
    }

    #[test]
    fn empty_registry_yields_none() {
        assert!(first_coin_in_range(&pos(0.0, 0.0), &[]).is_none());
    }
}
