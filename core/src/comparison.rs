//! Side-by-side runs of all four algorithms over one query.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::network::TransitNetwork;
use crate::search::{Algorithm, search};
use crate::stats::route_stats;

/// One algorithm's outcome for a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub route_found: bool,
    pub hops: usize,
    pub nodes_explored: usize,
    pub total_distance: f64,
    pub total_time: u32,
    pub total_fare: u32,
    pub search_time_ms: u64,
}

/// Run every algorithm on the same start/goal pair and aggregate trip
/// statistics for each. Rows come back in `Algorithm::all()` order.
pub fn compare_algorithms(
    network: &TransitNetwork,
    start: &str,
    goal: &str,
) -> Vec<ComparisonRow> {
    Algorithm::all()
        .into_iter()
        .map(|algorithm| {
            let timer = Instant::now();
            let result = search(network, algorithm, start, goal);
            let search_time_ms = timer.elapsed().as_millis() as u64;

            let stats = route_stats(network, &result.path);

            ComparisonRow {
                algorithm,
                route_found: result.found(),
                hops: result.hops(),
                nodes_explored: result.nodes_explored,
                total_distance: stats.total_distance,
                total_time: stats.total_time,
                total_fare: stats.total_fare,
                search_time_ms,
            }
        })
        .collect()
}
