//! Transit graph model: stops, directed routes, and the neighbor index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::string_normalization::clean_str;

/// A named location in the transit graph.
///
/// `x`/`y` are display coordinates for rendering layers; `lat`/`lon` feed the
/// straight-line heuristic. Stops are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub fn new(name: &str, x: f64, y: f64, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            lat,
            lon,
        }
    }
}

/// A directed weighted edge between two stops.
///
/// Line numbers are not unique: several routes may share one, and every
/// bidirectional road segment is stored as two opposite-direction routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    /// Kilometers.
    pub distance: f64,
    /// Minutes.
    pub time: u32,
    /// Rupees.
    pub fare: u32,
    pub line: String,
}

impl Route {
    pub fn new(from: &str, to: &str, distance: f64, time: u32, fare: u32, line: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            time,
            fare,
            line: line.to_string(),
        }
    }
}

/// The in-memory transit graph: stops in table order, routes in insertion
/// order, plus lookup indices built once at construction.
///
/// Read-only after `new` returns, so a single instance can be shared freely
/// across concurrent searches.
pub struct TransitNetwork {
    stops: Vec<Stop>,
    stop_index: FxHashMap<String, usize>,
    name_lookup: FxHashMap<String, usize>,
    routes: Vec<Route>,
    outgoing: FxHashMap<String, Vec<usize>>,
}

impl TransitNetwork {
    /// Build the network and its adjacency index.
    ///
    /// Panics if a route references a stop name that is not in `stops`; the
    /// tables are static, so a bad reference is a construction-time defect,
    /// not a runtime condition.
    pub fn new(stops: Vec<Stop>, routes: Vec<Route>) -> Self {
        let mut stop_index = FxHashMap::default();
        let mut name_lookup = FxHashMap::default();

        for (position, stop) in stops.iter().enumerate() {
            stop_index.insert(stop.name.clone(), position);
            name_lookup.insert(clean_str(&stop.name), position);
        }

        let mut outgoing: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, route) in routes.iter().enumerate() {
            assert!(
                stop_index.contains_key(&route.from) && stop_index.contains_key(&route.to),
                "route {} -> {} references an unknown stop",
                route.from,
                route.to
            );
            outgoing
                .entry(route.from.clone())
                .or_default()
                .push(position);
        }

        Self {
            stops,
            stop_index,
            name_lookup,
            routes,
            outgoing,
        }
    }

    /// All stops in table order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes in insertion order (table order, forward then reverse).
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|&position| &self.stops[position])
    }

    pub fn contains_stop(&self, name: &str) -> bool {
        self.stop_index.contains_key(name)
    }

    /// Every outgoing route from `name`, in insertion order, with its
    /// destination stop name. Unknown names and dead ends both yield an
    /// empty iterator; duplicates are not filtered.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, &'a Route)> {
        self.outgoing
            .get(name)
            .into_iter()
            .flatten()
            .map(|&position| {
                let route = &self.routes[position];
                (route.to.as_str(), route)
            })
    }

    /// Resolve a user-supplied stop name (case- and diacritic-insensitive)
    /// to its canonical name.
    pub fn resolve_stop(&self, query: &str) -> Result<&str, String> {
        self.name_lookup
            .get(&clean_str(query))
            .map(|&position| self.stops[position].name.as_str())
            .ok_or_else(|| format!("Stop '{}' not found in the network", query))
    }
}
