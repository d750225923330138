// Route models for representing a computed delivery route

use crate::models::{Kilometers, LocationId, Minutes};
use serde::{Deserialize, Serialize};

/// One hop of the route: moving from the previous stop to `stop_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    /// Stop reached by this leg
    pub stop_id: LocationId,

    /// Rounded great-circle distance from the previous stop
    pub distance_km: Kilometers,

    /// Travel time at the configured speed
    pub travel_minutes: Minutes,

    /// Mandatory wait at the stop
    pub wait_minutes: Minutes,

    /// max(travel, wait); the cost this stop won the greedy selection with
    pub effective_cost: Minutes,
}

/// Complete route for one courier, in visiting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Id of the courier's starting position
    pub start: LocationId,

    /// Legs in the order the stops are visited; never reordered once appended
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// Creates an empty route at the given start
    pub fn new<S: Into<LocationId>>(start: S) -> Self {
        Self {
            start: start.into(),
            legs: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, leg: RouteLeg) {
        self.legs.push(leg);
    }

    /// Start id followed by every stop id in visiting order
    pub fn sequence(&self) -> Vec<LocationId> {
        std::iter::once(self.start.clone())
            .chain(self.legs.iter().map(|leg| leg.stop_id.clone()))
            .collect()
    }

    /// Position of a stop in `sequence()` (the start is position 0)
    pub fn position_of(&self, id: &str) -> Option<usize> {
        if self.start == id {
            return Some(0);
        }
        self.legs
            .iter()
            .position(|leg| leg.stop_id == id)
            .map(|index| index + 1)
    }

    /// Sum of the effective costs of all legs
    pub fn total_effective_cost(&self) -> Minutes {
        self.legs.iter().map(|leg| leg.effective_cost).sum()
    }

    /// Number of stops visited, excluding the start
    pub fn stop_count(&self) -> usize {
        self.legs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(id: &str, cost: Minutes) -> RouteLeg {
        RouteLeg {
            stop_id: id.to_string(),
            distance_km: 0.0,
            travel_minutes: 0.0,
            wait_minutes: cost,
            effective_cost: cost,
        }
    }

    #[test]
    fn test_sequence_starts_with_origin() {
        let mut plan = RoutePlan::new("Aman");
        plan.push(leg("R1", 10.0));
        plan.push(leg("C1", 5.0));

        assert_eq!(plan.sequence(), vec!["Aman", "R1", "C1"]);
        assert_eq!(plan.stop_count(), 2);
        assert_eq!(plan.total_effective_cost(), 15.0);
    }

    #[test]
    fn test_position_of() {
        let mut plan = RoutePlan::new("S");
        plan.push(leg("R1", 1.0));

        assert_eq!(plan.position_of("S"), Some(0));
        assert_eq!(plan.position_of("R1"), Some(1));
        assert_eq!(plan.position_of("X"), None);
    }

    #[test]
    fn test_empty_plan() {
        let plan = RoutePlan::new("S");
        assert_eq!(plan.sequence(), vec!["S"]);
        assert_eq!(plan.total_effective_cost(), 0.0);
    }
}
