//! In-memory transport catalogue.
//!
//! Owns every stop and route, the stop-to-route index, measured distances and
//! a spatial index of defined stops. All structures are consistent after each
//! insertion, so inserts and queries may be interleaved freely.

pub mod distances;
pub mod registry;
pub mod statistics;
pub mod stop_routes;

use std::collections::BTreeSet;

use rstar::RTree;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::index::{query_point, StopNode};
use crate::spatial::queries::{compute_distance, search_radius_degrees};

pub use distances::DistanceTable;
pub use registry::{RouteRegistry, StopDefinition, StopRegistry};
pub use stop_routes::StopRouteIndex;

#[derive(Clone, Default)]
pub struct TransportCatalogue {
    stops: StopRegistry,
    routes: RouteRegistry,
    stop_routes: StopRouteIndex,
    distances: DistanceTable,
    stop_tree: RTree<StopNode>,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Insertion ----

    /// Define a stop, or move an existing one. The handle never changes.
    ///
    /// Stops with non-finite coordinates are stored but left out of the
    /// spatial index.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        let (id, outcome) = self.stops.define(name, coordinates);
        match outcome {
            StopDefinition::Created => {}
            StopDefinition::ResolvedPlaceholder => {
                tracing::debug!(stop = name, %id, "resolved placeholder stop");
            }
            StopDefinition::Redefined(previous) => {
                tracing::debug!(stop = name, %id, ?previous, ?coordinates, "redefined stop");
                if previous.is_finite() {
                    self.stop_tree.remove(&StopNode::new(id, previous));
                }
            }
        }

        if coordinates.is_finite() {
            self.stop_tree.insert(StopNode::new(id, coordinates));
        } else {
            tracing::warn!(stop = name, %id, ?coordinates, "non-finite coordinates, stop not indexed");
        }
        id
    }

    /// Handle for `name`, creating a placeholder stop if it is unknown.
    pub fn find_or_create_stop(&mut self, name: &str) -> StopId {
        self.stops.find_or_create(name)
    }

    /// Add a route over stops given by name, in visiting order.
    ///
    /// Unknown stop names become placeholder stops. Fails for an empty
    /// sequence or a route name that is already taken.
    pub fn add_route<S: AsRef<str>>(&mut self, name: &str, stop_names: &[S]) -> Result<RouteId> {
        // Checked before resolving names so a rejected route creates no placeholders
        self.routes.check_insertable(name, stop_names.len())?;

        let stops: Vec<StopId> = stop_names
            .iter()
            .map(|stop| self.stops.find_or_create(stop.as_ref()))
            .collect();

        let id = self.routes.insert(name, stops)?;
        if let Some(route) = self.routes.get(id) {
            self.stop_routes.insert_route(id, route.stops());
        }

        tracing::debug!(route = name, %id, stops = stop_names.len(), "added route");
        Ok(id)
    }

    /// Record the measured road distance from one stop to another, by name.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) {
        let from = self.stops.find_or_create(from);
        let to = self.stops.find_or_create(to);
        self.distances.set(from, to, meters);
    }

    /// Record the measured road distance between two known stops.
    pub fn set_distance_between(&mut self, from: StopId, to: StopId, meters: u32) -> Result<()> {
        self.stop_checked(from)?;
        self.stop_checked(to)?;
        self.distances.set(from, to, meters);
        Ok(())
    }

    // ---- Distances ----

    /// Road distance in meters, falling back to the reverse measurement and
    /// then to the great-circle distance.
    pub fn distance(&self, from: StopId, to: StopId) -> Result<u32> {
        Ok(self.distances.resolve(self.stop_checked(from)?, self.stop_checked(to)?))
    }

    /// Only the explicit `from -> to` measurement.
    pub fn measured_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.measured(from, to)
    }

    /// Great-circle distance in meters between two stops.
    pub fn geo_distance(&self, from: StopId, to: StopId) -> Result<f64> {
        let from = self.stop_checked(from)?;
        let to = self.stop_checked(to)?;
        Ok(compute_distance(from.coordinates(), to.coordinates()))
    }

    // ---- Collections ----

    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    // ---- Spatial queries ----

    /// Defined stops within `radius_m` meters of `point`
    pub fn stops_near(&self, point: Coordinates, radius_m: f64) -> Vec<StopId> {
        // Validate radius is positive
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        let radius_deg = search_radius_degrees(radius_m, point.lat);
        self.stop_tree
            .locate_within_distance(query_point(point), radius_deg * radius_deg)
            .filter(|node| compute_distance(point, node.coordinates()) <= radius_m)
            .map(|node| node.stop)
            .collect()
    }

    /// The `n` defined stops closest to `point`
    pub fn nearest_stops(&self, point: Coordinates, n: usize) -> Vec<StopId> {
        self.stop_tree
            .nearest_neighbor_iter(&query_point(point))
            .take(n)
            .map(|node| node.stop)
            .collect()
    }

    fn stop_checked(&self, id: StopId) -> Result<&Stop> {
        self.stops.get(id).ok_or(CatalogueError::UnknownStop(id))
    }
}

impl TransitCatalogue for TransportCatalogue {
    fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stops.find(name)
    }

    fn find_route(&self, name: &str) -> Option<RouteId> {
        self.routes.find(name)
    }

    fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    fn route_statistics(&self, id: RouteId) -> Result<RouteStatistics> {
        let route = self.routes.get(id).ok_or(CatalogueError::UnknownRoute(id))?;
        Ok(statistics::compute(route, &self.stops, &self.distances))
    }

    fn routes_by_stop(&self, id: StopId) -> Result<&BTreeSet<RouteId>> {
        self.stop_checked(id)?;
        Ok(self.stop_routes.routes_for(id))
    }
}
