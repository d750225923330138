// Pickup-before-delivery feasibility check

use crate::models::Location;
use std::collections::HashSet;

/// Stops visited so far, in visiting order, with an id index for lookups
#[derive(Debug, Default)]
pub struct VisitedStops<'a> {
    order: Vec<&'a Location>,
    ids: HashSet<&'a str>,
}

impl<'a> VisitedStops<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stop; earlier entries are never reordered
    pub fn push(&mut self, location: &'a Location) {
        self.ids.insert(location.id.as_str());
        self.order.push(location);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited stops in visiting order
    pub fn iter(&self) -> impl Iterator<Item = &'a Location> + '_ {
        self.order.iter().copied()
    }
}

/// Whether `candidate` may be visited next.
///
/// A stop without a pickup source is visitable while it has not been visited.
/// A stop with a pickup source is visitable once that source has been visited;
/// its own presence in `visited` is not checked, so callers must drop visited
/// stops from their candidate set.
pub fn is_visitable(candidate: &Location, visited: &VisitedStops<'_>) -> bool {
    match candidate.pickup_source.as_deref() {
        None => !visited.contains(&candidate.id),
        Some(source) => visited.contains(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_visitable_until_visited() {
        let r1 = Location::restaurant("R1", 0.0, 0.0, 10.0);
        let mut visited = VisitedStops::new();

        assert!(is_visitable(&r1, &visited));
        visited.push(&r1);
        assert!(!is_visitable(&r1, &visited));
    }

    #[test]
    fn test_customer_requires_pickup() {
        let r1 = Location::restaurant("R1", 0.0, 0.0, 10.0);
        let r2 = Location::restaurant("R2", 0.0, 0.0, 10.0);
        let c1 = Location::customer("C1", 1.0, 1.0, "R1");
        let mut visited = VisitedStops::new();

        assert!(!is_visitable(&c1, &visited));

        visited.push(&r2);
        assert!(!is_visitable(&c1, &visited));

        visited.push(&r1);
        assert!(is_visitable(&c1, &visited));
    }

    #[test]
    fn test_visited_customer_is_not_rechecked() {
        let r1 = Location::restaurant("R1", 0.0, 0.0, 10.0);
        let c1 = Location::customer("C1", 1.0, 1.0, "R1");
        let mut visited = VisitedStops::new();
        visited.push(&r1);
        visited.push(&c1);

        // Exclusion of delivered customers is the caller's job
        assert!(is_visitable(&c1, &visited));
    }

    #[test]
    fn test_visited_order_is_preserved() {
        let a = Location::new("A", 0.0, 0.0);
        let b = Location::new("B", 0.0, 0.0);
        let mut visited = VisitedStops::new();
        visited.push(&b);
        visited.push(&a);

        let ids: Vec<&str> = visited.iter().map(|loc| loc.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(visited.len(), 2);
        assert!(!visited.is_empty());
    }
}
