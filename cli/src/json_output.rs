use buspath_core::Algorithm;
use serde::Serialize;

use crate::search::RouteOutcome;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<JsonSegment>,
}

#[derive(Serialize)]
pub struct JsonSegment {
    pub line: String,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_min: u32,
    pub fare: u32,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub nodes_explored: usize,
    pub exploration_order: Vec<String>,
    pub total_distance_km: f64,
    pub total_time_min: u32,
    pub total_fare: u32,
    pub search_time_ms: u64,
}

pub fn create_json_output(outcome: &RouteOutcome) -> JsonOutput {
    let segments = outcome
        .stats
        .segments
        .iter()
        .map(|segment| JsonSegment {
            line: segment.line.clone(),
            from: segment.from.clone(),
            to: segment.to.clone(),
            distance_km: segment.distance,
            time_min: segment.time,
            fare: segment.fare,
        })
        .collect();

    JsonOutput {
        query: JsonQuery {
            from: outcome.from.clone(),
            to: outcome.to.clone(),
            algorithm: outcome.algorithm,
        },
        result: JsonResult {
            found: outcome.result.found(),
            path: outcome.result.path.clone(),
            segments,
        },
        stats: JsonStats {
            nodes_explored: outcome.result.nodes_explored,
            exploration_order: outcome.result.exploration_order.clone(),
            total_distance_km: outcome.stats.total_distance,
            total_time_min: outcome.stats.total_time,
            total_fare: outcome.stats.total_fare,
            search_time_ms: (outcome.search_duration * 1000.0) as u64,
        },
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
