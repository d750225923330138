// Error types raised while building a route

use crate::models::LocationId;
use thiserror::Error;

/// Input rejected before the greedy loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The courier's starting location has an empty id.
    #[error("starting location has no id")]
    MissingStartId,
    /// A stop has an empty id.
    #[error("stop at index {index} has no id")]
    MissingStopId {
        /// Position of the stop in the input.
        index: usize,
    },
    /// Two stops (or a stop and the start) share an id.
    #[error("stop id {id:?} appears more than once")]
    DuplicateStopId {
        /// The repeated identifier.
        id: LocationId,
    },
    /// A customer references a pickup that is not among the stops.
    #[error("stop {stop:?} is picked up from {pickup_source:?}, which is not among the stops")]
    UnknownPickupSource {
        /// The customer stop.
        stop: LocationId,
        /// The missing restaurant id.
        pickup_source: LocationId,
    },
}

/// Rejected distance model constants.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("earth radius must be a positive number of kilometers, got {0}")]
    EarthRadius(f64),
    #[error("assumed speed must be a positive number of km/h, got {0}")]
    Speed(f64),
}

/// Errors returned by a route computation. Both are fatal to that call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The stop set is malformed.
    #[error("invalid route input: {0}")]
    InvalidInput(#[from] InputError),
    /// Stops remain but none of them can be visited next, e.g. because of
    /// customers whose pickups depend on each other.
    #[error("no visitable stop from {current:?}; remaining stops: {remaining:?}")]
    NoFeasibleCandidate {
        /// Id of the last visited location (or the start).
        current: LocationId,
        /// Ids still waiting to be visited, in input order.
        remaining: Vec<LocationId>,
    },
    /// The distance model configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
