//! Coordinate-based distance provider
//!
//! Haversine distance scaled by a road detour factor and rounded to whole km.

use std::collections::HashMap;

use freight_domain::DistanceProvider;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Typical ratio of road distance to straight-line distance
pub const DETOUR_FACTOR: f64 = 1.2;

#[derive(Debug, Clone)]
pub struct GreatCircleDistance {
    coordinates: HashMap<String, (f64, f64)>,
}

impl GreatCircleDistance {
    /// Build from `(name, latitude, longitude)` entries in degrees
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        let coordinates = entries
            .into_iter()
            .map(|(name, lat, lon)| (name.into(), (lat, lon)))
            .collect();
        Self { coordinates }
    }
}

pub fn haversine_km((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

impl DistanceProvider for GreatCircleDistance {
    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return None;
        }
        let a = *self.coordinates.get(from)?;
        let b = *self.coordinates.get(to)?;
        let km = (haversine_km(a, b) * DETOUR_FACTOR).round();
        (km > 0.0).then_some(km)
    }
}
