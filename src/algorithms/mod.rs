pub mod feasibility;
pub mod greedy;
pub mod validation;

// Common algorithm traits
use crate::error::RouteError;
use crate::models::{Location, RoutePlan};

/// Trait for single-courier pickup-and-delivery route builders
pub trait RouteSolver {
    /// Build the visiting order of `stops` starting from `start`
    fn solve(&self, start: &Location, stops: &[Location]) -> Result<RoutePlan, RouteError>;
}
