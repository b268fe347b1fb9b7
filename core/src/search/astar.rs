use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BinaryHeap;

use super::SearchResult;
use super::frontier::FrontierEntry;
use crate::geo::straight_line_km;
use crate::network::TransitNetwork;

struct AStarState {
    frontier: BinaryHeap<FrontierEntry>,
    visited: FxHashSet<String>,
    best_g: FxHashMap<String, f64>,
    discovered: FxHashSet<String>,
    exploration_order: Vec<String>,
    nodes_explored: usize,
    sequence: u64,
}

impl AStarState {
    fn new(start: &str) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: 0.0,
            sequence: 0,
            stop: start.to_string(),
            path: vec![start.to_string()],
        });

        let mut best_g = FxHashMap::default();
        best_g.insert(start.to_string(), 0.0);

        let mut discovered = FxHashSet::default();
        discovered.insert(start.to_string());

        Self {
            frontier,
            visited: FxHashSet::default(),
            best_g,
            discovered,
            exploration_order: vec![start.to_string()],
            nodes_explored: 0,
            sequence: 1,
        }
    }

    /// Standard relaxation: (re-)enqueue the neighbor only when the new
    /// accumulated distance beats the best one recorded so far. A stop may
    /// end up with several frontier entries; stale ones are skipped at pop.
    fn relax_neighbor(&mut self, neighbor: &str, g: f64, h: f64, path: &[String]) {
        let improves = match self.best_g.get(neighbor) {
            Some(&known) => g < known,
            None => true,
        };
        if !improves {
            return;
        }

        self.best_g.insert(neighbor.to_string(), g);
        if self.discovered.insert(neighbor.to_string()) {
            self.exploration_order.push(neighbor.to_string());
        }

        let mut extended = path.to_vec();
        extended.push(neighbor.to_string());
        self.frontier.push(FrontierEntry {
            priority: g + h,
            sequence: self.sequence,
            stop: neighbor.to_string(),
            path: extended,
        });
        self.sequence += 1;
    }

    fn into_result(self, path: Vec<String>) -> SearchResult {
        SearchResult {
            path,
            exploration_order: self.exploration_order,
            nodes_explored: self.nodes_explored,
        }
    }
}

/// A* search over accumulated route distance plus the straight-line estimate
/// to the goal. Ties on `f = g + h` break in insertion order.
pub fn astar_find_route(network: &TransitNetwork, start: &str, goal: &str) -> SearchResult {
    let mut state = AStarState::new(start);

    while let Some(entry) = state.frontier.pop() {
        state.nodes_explored += 1;

        if entry.stop == goal {
            return state.into_result(entry.path);
        }
        if !state.visited.insert(entry.stop.clone()) {
            continue;
        }

        let current_g = state.best_g[&entry.stop];
        for (neighbor, route) in network.neighbors(&entry.stop) {
            if state.visited.contains(neighbor) {
                continue;
            }
            let g = current_g + route.distance;
            let h = straight_line_km(network, neighbor, goal);
            state.relax_neighbor(neighbor, g, h, &entry.path);
        }
    }

    state.into_result(Vec::new())
}
