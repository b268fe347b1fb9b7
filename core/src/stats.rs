//! Trip statistics derived from a found path.

use serde::{Deserialize, Serialize};

use crate::network::{Route, TransitNetwork};

/// Totals and matched segments for one path, computed after the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    pub total_distance: f64,
    pub total_time: u32,
    pub total_fare: u32,
    pub segments: Vec<Route>,
}

impl RouteStats {
    fn empty() -> Self {
        Self {
            total_distance: 0.0,
            total_time: 0,
            total_fare: 0,
            segments: Vec::new(),
        }
    }
}

/// Re-walk `path` against the full route list and sum distance, time and
/// fare over the matched segments.
///
/// For each consecutive stop pair the first matching route in list order
/// wins, so duplicate parallel routes resolve to the earlier table entry. A
/// pair with no matching route contributes nothing; searches only traverse
/// real edges, so that arises only for hand-built paths.
pub fn route_stats(network: &TransitNetwork, path: &[String]) -> RouteStats {
    let mut stats = RouteStats::empty();

    for pair in path.windows(2) {
        let matched = network
            .routes()
            .iter()
            .find(|route| route.from == pair[0] && route.to == pair[1]);

        if let Some(route) = matched {
            stats.total_distance += route.distance;
            stats.total_time += route.time;
            stats.total_fare += route.fare;
            stats.segments.push(route.clone());
        }
    }

    stats
}
