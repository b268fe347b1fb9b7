use rustc_hash::FxHashSet;
use std::collections::BinaryHeap;

use super::SearchResult;
use super::frontier::FrontierEntry;
use crate::geo::straight_line_km;
use crate::network::TransitNetwork;

struct GreedyState {
    frontier: BinaryHeap<FrontierEntry>,
    visited: FxHashSet<String>,
    discovered: FxHashSet<String>,
    exploration_order: Vec<String>,
    nodes_explored: usize,
    sequence: u64,
}

impl GreedyState {
    fn new(start: &str) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: 0.0,
            sequence: 0,
            stop: start.to_string(),
            path: vec![start.to_string()],
        });

        let mut discovered = FxHashSet::default();
        discovered.insert(start.to_string());

        Self {
            frontier,
            visited: FxHashSet::default(),
            discovered,
            exploration_order: vec![start.to_string()],
            nodes_explored: 0,
            sequence: 1,
        }
    }

    /// No cost tracking: every unvisited neighbor is enqueued, so a stop can
    /// sit in the frontier several times until its first pop settles it.
    fn enqueue_neighbor(&mut self, neighbor: &str, h: f64, path: &[String]) {
        if self.discovered.insert(neighbor.to_string()) {
            self.exploration_order.push(neighbor.to_string());
        }

        let mut extended = path.to_vec();
        extended.push(neighbor.to_string());
        self.frontier.push(FrontierEntry {
            priority: h,
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

/// Greedy best-first search: always expands the frontier entry closest to the
/// goal by straight-line distance. Fast, not optimal by any metric.
pub fn greedy_find_route(network: &TransitNetwork, start: &str, goal: &str) -> SearchResult {
    let mut state = GreedyState::new(start);

    while let Some(entry) = state.frontier.pop() {
        state.nodes_explored += 1;

        if entry.stop == goal {
            return state.into_result(entry.path);
        }
        if !state.visited.insert(entry.stop.clone()) {
            continue;
        }

        for (neighbor, _route) in network.neighbors(&entry.stop) {
            if state.visited.contains(neighbor) {
                continue;
            }
            let h = straight_line_km(network, neighbor, goal);
            state.enqueue_neighbor(neighbor, h, &entry.path);
        }
    }

    state.into_result(Vec::new())
}
