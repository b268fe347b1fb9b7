#![allow(dead_code)]

use buspath_core::{Route, Stop, TransitNetwork};

/// Build a network from compact tables: stops as (name, lat, lon), routes as
/// directed (from, to, distance). Time, fare and line are filled with
/// placeholder weights since only distances drive the informed searches.
pub fn build_network(stops: &[(&str, f64, f64)], routes: &[(&str, &str, f64)]) -> TransitNetwork {
    let stops = stops
        .iter()
        .map(|&(name, lat, lon)| Stop::new(name, 0.0, 0.0, lat, lon))
        .collect();
    let routes = routes
        .iter()
        .map(|&(from, to, distance)| Route::new(from, to, distance, 5, 10, "T1"))
        .collect();
    TransitNetwork::new(stops, routes)
}

/// A - B - C - D chain, bidirectional, 2 km per segment.
pub fn line_network() -> TransitNetwork {
    build_network(
        &[
            ("A", 0.0, 0.00),
            ("B", 0.0, 0.01),
            ("C", 0.0, 0.02),
            ("D", 0.0, 0.03),
        ],
        &[
            ("A", "B", 2.0),
            ("B", "A", 2.0),
            ("B", "C", 2.0),
            ("C", "B", 2.0),
            ("C", "D", 2.0),
            ("D", "C", 2.0),
        ],
    )
}

/// Two branches from S to G: a cheap three-hop branch through A and B, and
/// an expensive two-hop branch through C. BFS should prefer the hop count,
/// cost-aware searches the distance.
pub fn fork_network() -> TransitNetwork {
    build_network(
        &[
            ("S", 0.0, 0.00),
            ("A", 0.0, 0.01),
            ("B", 0.0, 0.02),
            ("C", 0.0, -0.01),
            ("G", 0.0, 0.03),
        ],
        &[
            ("S", "A", 1.0),
            ("S", "C", 10.0),
            ("A", "B", 1.0),
            ("B", "G", 1.0),
            ("C", "G", 10.0),
        ],
    )
}

/// A and B form a connected pair; C exists but has no routes at all.
pub fn disconnected_network() -> TransitNetwork {
    build_network(
        &[("A", 0.0, 0.00), ("B", 0.0, 0.01), ("C", 1.0, 1.00)],
        &[("A", "B", 1.0), ("B", "A", 1.0)],
    )
}

/// Greedy bait: T sits right next to the goal but both its routes are 50 km,
/// while the branch through U (further away as the crow flies) costs 2 km in
/// total.
pub fn trap_network() -> TransitNetwork {
    build_network(
        &[
            ("G", 0.0, 0.00),
            ("T", 0.0, 0.01),
            ("S", 0.0, 0.03),
            ("U", 0.0, 0.05),
        ],
        &[
            ("S", "T", 50.0),
            ("S", "U", 1.0),
            ("T", "G", 50.0),
            ("U", "G", 1.0),
        ],
    )
}

/// All stops share one coordinate, so the heuristic is zero everywhere and
/// A* degrades to plain distance ordering. A is first reached at cost 10 and
/// later relaxed down to 2 through B, leaving a stale frontier entry.
pub fn relaxation_network() -> TransitNetwork {
    build_network(
        &[
            ("S", 0.0, 0.0),
            ("A", 0.0, 0.0),
            ("B", 0.0, 0.0),
            ("G", 0.0, 0.0),
        ],
        &[
            ("S", "A", 10.0),
            ("S", "B", 1.0),
            ("B", "A", 1.0),
            ("A", "G", 20.0),
        ],
    )
}

/// Flat-coordinate diamond with two equal-cost paths from S to G; only the
/// insertion-order tie-break decides which one wins.
pub fn diamond_network() -> TransitNetwork {
    build_network(
        &[
            ("S", 0.0, 0.0),
            ("A", 0.0, 0.0),
            ("B", 0.0, 0.0),
            ("G", 0.0, 0.0),
        ],
        &[
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "G", 1.0),
            ("B", "G", 1.0),
        ],
    )
}

/// Flat-coordinate double diamond: C is reachable from both A and B, so
/// greedy enqueues it twice before its first pop settles it.
pub fn double_diamond_network() -> TransitNetwork {
    build_network(
        &[
            ("S", 0.0, 0.0),
            ("A", 0.0, 0.0),
            ("B", 0.0, 0.0),
            ("C", 0.0, 0.0),
            ("G", 0.0, 0.0),
        ],
        &[
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "C", 1.0),
            ("C", "G", 1.0),
        ],
    )
}

/// A → B twice with different weights, plus the reverse edge. Exercises the
/// aggregator's first-match rule for duplicate parallel routes.
pub fn parallel_routes_network() -> TransitNetwork {
    let stops = vec![
        Stop::new("A", 0.0, 0.0, 0.0, 0.00),
        Stop::new("B", 0.0, 0.0, 0.0, 0.01),
    ];
    let routes = vec![
        Route::new("A", "B", 3.0, 9, 20, "EX1"),
        Route::new("B", "A", 3.0, 9, 20, "EX1"),
        Route::new("A", "B", 1.0, 4, 12, "EX2"),
        Route::new("B", "A", 1.0, 4, 12, "EX2"),
    ];
    TransitNetwork::new(stops, routes)
}
