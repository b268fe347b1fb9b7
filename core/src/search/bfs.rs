use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::SearchResult;
use crate::network::TransitNetwork;

struct BfsState {
    frontier: VecDeque<Vec<String>>,
    discovered: FxHashSet<String>,
    exploration_order: Vec<String>,
    nodes_explored: usize,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut frontier = VecDeque::new();
        let mut discovered = FxHashSet::default();

        frontier.push_back(vec![start.to_string()]);
        discovered.insert(start.to_string());

        Self {
            frontier,
            discovered,
            exploration_order: vec![start.to_string()],
            nodes_explored: 0,
        }
    }

    fn discover_neighbor(&mut self, neighbor: &str, path: &[String]) {
        if self.discovered.insert(neighbor.to_string()) {
            self.exploration_order.push(neighbor.to_string());
            let mut extended = path.to_vec();
            extended.push(neighbor.to_string());
            self.frontier.push_back(extended);
        }
    }

    fn into_result(self, path: Vec<String>) -> SearchResult {
        SearchResult {
            path,
            exploration_order: self.exploration_order,
            nodes_explored: self.nodes_explored,
        }
    }
}

/// Breadth-first search: level-order expansion, shortest path by hop count.
pub fn bfs_find_route(network: &TransitNetwork, start: &str, goal: &str) -> SearchResult {
    let mut state = BfsState::new(start);

    while let Some(path) = state.frontier.pop_front() {
        state.nodes_explored += 1;
        let current = path.last().expect("frontier paths are never empty");

        if current == goal {
            let found = path.clone();
            return state.into_result(found);
        }

        let current = current.clone();
        for (neighbor, _route) in network.neighbors(&current) {
            state.discover_neighbor(neighbor, &path);
        }
    }

    state.into_result(Vec::new())
}
