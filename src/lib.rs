// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::greedy::{build_route, GreedyRouteBuilder};
pub use algorithms::RouteSolver;
pub use config::RouteConfig;
pub use error::{ConfigError, InputError, RouteError};
pub use models::{Location, RouteLeg, RouteOutcome, RoutePlan, RouteRequest};
