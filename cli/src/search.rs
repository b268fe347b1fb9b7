use std::time::Instant;

use buspath_core::{Algorithm, RouteStats, SearchResult, TransitNetwork, route_stats, search};

use crate::args::Args;

#[derive(Debug)]
pub struct SearchRequest {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
    pub display_options: Args,
}

pub struct RouteOutcome {
    pub result: SearchResult,
    pub stats: RouteStats,
    pub search_duration: f64,
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
    pub display_options: Args,
}

/// Resolve both stop names and reject same-stop queries; the search core
/// treats start == goal as a degenerate success, so the user error is
/// caught here.
pub fn create_search_request(args: Args, network: &TransitNetwork) -> Result<SearchRequest, String> {
    let from = network.resolve_stop(&args.from)?.to_string();
    let to = network.resolve_stop(&args.to)?.to_string();

    if from == to {
        return Err("start and destination stops must be different".to_string());
    }

    let algorithm = Algorithm::from(args.algorithm.as_str());

    Ok(SearchRequest {
        from,
        to,
        algorithm,
        display_options: args,
    })
}

pub fn execute_search(request: SearchRequest, network: &TransitNetwork) -> RouteOutcome {
    let timer = Instant::now();
    let result = search(network, request.algorithm, &request.from, &request.to);
    let search_duration = timer.elapsed().as_secs_f64();

    let stats = route_stats(network, &result.path);

    RouteOutcome {
        result,
        stats,
        search_duration,
        from: request.from,
        to: request.to,
        algorithm: request.algorithm,
        display_options: request.display_options,
    }
}
