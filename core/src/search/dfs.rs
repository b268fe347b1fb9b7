use rustc_hash::FxHashSet;

use super::SearchResult;
use crate::network::TransitNetwork;

struct DfsState {
    frontier: Vec<Vec<String>>,
    discovered: FxHashSet<String>,
    exploration_order: Vec<String>,
    nodes_explored: usize,
}

impl DfsState {
    fn new(start: &str) -> Self {
        let mut discovered = FxHashSet::default();
        discovered.insert(start.to_string());

        Self {
            frontier: vec![vec![start.to_string()]],
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
            self.frontier.push(extended);
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

/// Depth-first search: LIFO frontier, so the last-discovered neighbor is
/// expanded first. Finds a path, not necessarily a short one.
pub fn dfs_find_route(network: &TransitNetwork, start: &str, goal: &str) -> SearchResult {
    let mut state = DfsState::new(start);

    while let Some(path) = state.frontier.pop() {
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
