//! Inverse index from stops to the routes that visit them.

use std::collections::{BTreeSet, HashMap};

use crate::identifiers::*;

static NO_ROUTES: BTreeSet<RouteId> = BTreeSet::new();

#[derive(Clone, Debug, Default)]
pub struct StopRouteIndex {
    by_stop: HashMap<StopId, BTreeSet<RouteId>>,
}

impl StopRouteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `route` as visiting every stop in `stops`.
    ///
    /// Stops repeated within the sequence collapse into one membership.
    pub fn insert_route(&mut self, route: RouteId, stops: &[StopId]) {
        for &stop in stops {
            self.by_stop.entry(stop).or_default().insert(route);
        }
    }

    /// Routes visiting `stop`; the empty set if none do.
    pub fn routes_for(&self, stop: StopId) -> &BTreeSet<RouteId> {
        self.by_stop.get(&stop).unwrap_or(&NO_ROUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(i: usize) -> StopId {
        StopId::from_index(i)
    }

    fn route(i: usize) -> RouteId {
        RouteId::from_index(i)
    }

    #[test]
    fn test_repeated_stops_collapse() {
        let mut index = StopRouteIndex::new();
        index.insert_route(route(0), &[stop(0), stop(1), stop(0)]);

        assert_eq!(index.routes_for(stop(0)).len(), 1);
        assert!(index.routes_for(stop(1)).contains(&route(0)));
    }

    #[test]
    fn test_shared_stop_lists_every_route() {
        let mut index = StopRouteIndex::new();
        index.insert_route(route(1), &[stop(0), stop(2)]);
        index.insert_route(route(0), &[stop(2), stop(3)]);

        let routes: Vec<_> = index.routes_for(stop(2)).iter().copied().collect();
        assert_eq!(routes, vec![route(0), route(1)]);
    }

    #[test]
    fn test_unvisited_stop_has_empty_set() {
        let index = StopRouteIndex::new();
        assert!(index.routes_for(stop(42)).is_empty());
    }
}
