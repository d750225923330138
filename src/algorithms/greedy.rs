// Greedy pickup-and-delivery route construction

// Repeatedly move to the visitable stop with the lowest max(travel, wait);
// ties go to the stop that comes first in the input. O(n²) in the stop count.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::algorithms::feasibility::{is_visitable, VisitedStops};
use crate::algorithms::validation::validate_stops;
use crate::algorithms::RouteSolver;
use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::models::{Location, LocationId, Minutes, RouteLeg, RoutePlan, RouteRequest};
use crate::utils::distance::travel_time_minutes;

/// The binding delay before the courier can leave a stop
pub fn effective_cost(travel_minutes: Minutes, wait_minutes: Minutes) -> Minutes {
    travel_minutes.max(wait_minutes)
}

/// Greedy route builder for a single courier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GreedyRouteBuilder {
    config: RouteConfig,
}

impl GreedyRouteBuilder {
    /// Creates a builder with the given distance model
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Builds the route for `stops` starting at `start`.
    ///
    /// Input is validated before the loop starts, so a failure never returns
    /// a partial route.
    pub fn build(&self, start: &Location, stops: &[Location]) -> Result<RoutePlan, RouteError> {
        self.config.validate()?;
        validate_stops(start, stops)?;

        // Input order is kept so that ties resolve deterministically
        let mut remaining: Vec<&Location> = stops.iter().collect();
        let mut visited = VisitedStops::new();
        let mut current = start;
        let mut plan = RoutePlan::new(start.id.clone());

        while !remaining.is_empty() {
            let Some((index, leg)) = self.select_next(current, &remaining, &visited) else {
                let remaining: Vec<LocationId> =
                    remaining.iter().map(|loc| loc.id.clone()).collect();
                warn!(
                    current = %current.id,
                    remaining = ?remaining,
                    "no visitable stop left"
                );
                return Err(RouteError::NoFeasibleCandidate {
                    current: current.id.clone(),
                    remaining,
                });
            };

            // Removing the stop here is what keeps delivered customers from
            // being selected twice
            let next = remaining.remove(index);
            debug!(
                from = %current.id,
                to = %next.id,
                cost = leg.effective_cost,
                "selected next stop"
            );
            visited.push(next);
            plan.push(leg);
            current = next;
        }

        info!(
            start = %plan.start,
            stops = plan.stop_count(),
            total_cost = plan.total_effective_cost(),
            "route built"
        );
        Ok(plan)
    }

    /// Builds independent routes for many couriers in parallel.
    ///
    /// Results are in request order; a request with its own `config` uses it
    /// instead of the builder's.
    pub fn build_many(&self, requests: &[RouteRequest]) -> Vec<Result<RoutePlan, RouteError>> {
        requests
            .par_iter()
            .map(|request| {
                let builder = request.config.map(GreedyRouteBuilder::new).unwrap_or(*self);
                builder.build(&request.start, &request.stops)
            })
            .collect()
    }

    /// Cheapest visitable stop and the leg leading to it. The first stop in
    /// `remaining` wins among equal costs.
    fn select_next(
        &self,
        current: &Location,
        remaining: &[&Location],
        visited: &VisitedStops<'_>,
    ) -> Option<(usize, RouteLeg)> {
        let mut best: Option<(usize, RouteLeg)> = None;

        for (index, candidate) in remaining.iter().enumerate() {
            if !is_visitable(candidate, visited) {
                continue;
            }
            let leg = self.leg(current, candidate);
            let is_better = match &best {
                Some((_, best_leg)) => leg.effective_cost < best_leg.effective_cost,
                None => true,
            };
            if is_better {
                best = Some((index, leg));
            }
        }

        best
    }

    fn leg(&self, from: &Location, to: &Location) -> RouteLeg {
        let distance_km = self.config.distance_km(from, to);
        let travel_minutes = travel_time_minutes(distance_km, self.config.assumed_speed_kmh);

        RouteLeg {
            stop_id: to.id.clone(),
            distance_km,
            travel_minutes,
            wait_minutes: to.wait_time,
            effective_cost: effective_cost(travel_minutes, to.wait_time),
        }
    }
}

impl RouteSolver for GreedyRouteBuilder {
    fn solve(&self, start: &Location, stops: &[Location]) -> Result<RoutePlan, RouteError> {
        self.build(start, stops)
    }
}

/// Visiting order `[start.id, ...stop ids]` with the default configuration
pub fn build_route(start: &Location, stops: &[Location]) -> Result<Vec<LocationId>, RouteError> {
    GreedyRouteBuilder::default()
        .build(start, stops)
        .map(|plan| plan.sequence())
}
