//! The four search strategies and their shared result contract.
//!
//! All algorithms share one shape: a frontier of partial paths, a search loop
//! that counts every pop, and an exploration-order log that records each stop
//! at the moment it is first discovered (the start stop is pre-seeded). They
//! differ only in frontier discipline: FIFO (BFS), LIFO (DFS), or a priority
//! queue keyed on `g + h` (A*) or `h` alone (Greedy).

mod astar;
mod bfs;
mod dfs;
mod frontier;
mod greedy;

pub use astar::astar_find_route;
pub use bfs::bfs_find_route;
pub use dfs::dfs_find_route;
pub use greedy::greedy_find_route;

use serde::{Deserialize, Serialize};

use crate::network::TransitNetwork;

/// Selector for the four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
    Greedy,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Human-readable name for display layers.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::AStar => "A*",
            Algorithm::Greedy => "Greedy",
        }
    }

    /// All strategies, in comparison-display order.
    pub fn all() -> [Algorithm; 4] {
        [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::AStar,
            Algorithm::Greedy,
        ]
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::AStar
    }
}

impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bfs" => Algorithm::Bfs,
            "dfs" => Algorithm::Dfs,
            "astar" | "a*" | "a-star" => Algorithm::AStar,
            "greedy" => Algorithm::Greedy,
            _ => Algorithm::default(),
        }
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Algorithm::from(name.as_str())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single search call.
///
/// `path` runs from start to goal inclusive and is empty when no route was
/// found. `exploration_order` lists distinct stops in first-discovery order,
/// starting with the start stop. `nodes_explored` counts every frontier pop,
/// including stale re-pops of already-settled stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Vec<String>,
    pub exploration_order: Vec<String>,
    pub nodes_explored: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of route segments in the found path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run the selected strategy. Never panics: unknown stop names behave as
/// stops without outgoing routes and surface as an empty-path result.
pub fn search(
    network: &TransitNetwork,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
) -> SearchResult {
    match algorithm {
        Algorithm::Bfs => bfs_find_route(network, start, goal),
        Algorithm::Dfs => dfs_find_route(network, start, goal),
        Algorithm::AStar => astar_find_route(network, start, goal),
        Algorithm::Greedy => greedy_find_route(network, start, goal),
    }
}
