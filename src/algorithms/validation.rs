// Eager input checks, run before any route is computed

use crate::error::InputError;
use crate::models::Location;
use std::collections::HashSet;

/// Checks ids and pickup references of a route input.
///
/// Ids must be non-empty and unique across the start and all stops, and
/// every `pickup_source` must name one of the stops. Coordinates are not
/// checked.
pub fn validate_stops(start: &Location, stops: &[Location]) -> Result<(), InputError> {
    if start.id.is_empty() {
        return Err(InputError::MissingStartId);
    }

    let mut ids: HashSet<&str> = HashSet::with_capacity(stops.len());
    for (index, stop) in stops.iter().enumerate() {
        if stop.id.is_empty() {
            return Err(InputError::MissingStopId { index });
        }
        if stop.id == start.id || !ids.insert(stop.id.as_str()) {
            return Err(InputError::DuplicateStopId {
                id: stop.id.clone(),
            });
        }
    }

    for stop in stops {
        if let Some(source) = stop.pickup_source.as_deref() {
            if !ids.contains(source) {
                return Err(InputError::UnknownPickupSource {
                    stop: stop.id.clone(),
                    pickup_source: source.to_string(),
                });
            }
        }
    }

    Ok(())
}
