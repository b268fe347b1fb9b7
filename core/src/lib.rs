pub mod comparison;
pub mod dataset;
pub mod geo;
pub mod network;
pub mod search;
pub mod stats;
pub mod string_normalization;

// Re-export commonly used items
pub use comparison::{ComparisonRow, compare_algorithms};
pub use dataset::default_network;
pub use geo::haversine_distance;
pub use network::{Route, Stop, TransitNetwork};
pub use search::{Algorithm, SearchResult, search};
pub use stats::{RouteStats, route_stats};
