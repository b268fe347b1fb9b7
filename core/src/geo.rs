//! Great-circle distance, used as the heuristic by the informed searches.

use crate::network::{Stop, TransitNetwork};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two stops' geocoordinates, in kilometers.
pub fn haversine_distance(a: &Stop, b: &Stop) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Heuristic lookup by stop name. Names that are not in the network
/// contribute a zero estimate, so a search toward an unknown goal degrades
/// to an uninformed sweep instead of panicking.
pub fn straight_line_km(network: &TransitNetwork, from: &str, to: &str) -> f64 {
    match (network.stop(from), network.stop(to)) {
        (Some(a), Some(b)) => haversine_distance(a, b),
        _ => 0.0,
    }
}
