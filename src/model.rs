//! Core data models for Coin Hunt.
//! Coins are a fixed, compiled-in set of AR points of interest.

use serde::{Deserialize, Serialize};

/// A fixed point of interest the user can collect in AR.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub lat: f64,
    pub lng: f64,
}

impl Coin {
    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

/// Latest known device fix. Each new reading replaces the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// The coin registry. Order matters: the Enter AR button picks the first
/// coin in range by this order, not the nearest one.
pub const COINS: &[Coin] = &[
    Coin { id: 1, lat: 31.5204, lng: 74.3587 },
    Coin { id: 2, lat: 33.6844, lng: 73.0479 },
    Coin { id: 3, lat: 31.660101, lng: 73.935246 },
    Coin { id: 4, lat: 31.420211, lng: 74.24318 },
    Coin { id: 5, lat: 31.660054, lng: 73.935277 },
    Coin { id: 6, lat: 31.5654144, lng: 74.3571456 },
    Coin { id: 7, lat: 31.559992487574895, lng: 74.39599295296996 },
    Coin { id: 8, lat: 30.9723136, lng: 73.9704832 },
    Coin { id: 9, lat: 31.5293696, lng: 74.3243776 },
    Coin { id: 10, lat: 50.8503, lng: 4.3517 },
];

/// Default camera center until the first fix arrives, as `[lng, lat]`.
pub const DEFAULT_CENTER: [f64; 2] = [74.3587, 31.5204];
pub const DEFAULT_ZOOM: f64 = 15.0;
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let mut ids: Vec<u32> = COINS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), COINS.len());
    }

    #[test]
    fn registry_coordinates_are_plausible() {
        for coin in COINS {
            assert!(coin.lat.abs() <= 90.0, "coin {} latitude out of range", coin.id);
            assert!(coin.lng.abs() <= 180.0, "coin {} longitude out of range", coin.id);
        }
    }
}
