//! Core data types for the transport catalogue.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Value Types
// ============================================================================

/// Geographic position in degrees.
///
/// `Coordinates::default()` is `(0, 0)`, which is also what a stop carries
/// while it is only a forward reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// `geo` points are (x = longitude, y = latitude).
    pub fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

impl From<Point> for Coordinates {
    fn from(point: Point) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Statistics for one route, computed on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStatistics {
    /// Number of stops visited, repeats included
    pub total_stops: usize,
    pub unique_stops: usize,
    /// Sum of road distances between consecutive stops, in meters
    pub route_length: u64,
    /// Sum of great-circle distances between consecutive stops, in meters
    pub route_length_direct: f64,
    /// `route_length / route_length_direct`, or 0 when the direct length is 0
    pub curvature: f64,
}

// ============================================================================
// Entities
// ============================================================================

/// A named stop.
///
/// The name never changes after allocation. Coordinates are filled in by the
/// first explicit definition and overwritten by any later one.
#[derive(Clone, Debug)]
pub struct Stop {
    id: StopId,
    name: Arc<str>,
    coordinates: Coordinates,
    defined: bool,
}

impl Stop {
    pub(crate) fn placeholder(id: StopId, name: Arc<str>) -> Self {
        Self {
            id,
            name,
            coordinates: Coordinates::default(),
            defined: false,
        }
    }

    pub(crate) fn define(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
        self.defined = true;
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// True while the stop has only been referenced, never defined.
    pub fn is_placeholder(&self) -> bool {
        !self.defined
    }
}

/// A named, ordered sequence of stops.
#[derive(Clone, Debug)]
pub struct Route {
    id: RouteId,
    name: Arc<str>,
    stops: Vec<StopId>,
}

impl Route {
    pub(crate) fn new(id: RouteId, name: Arc<str>, stops: Vec<StopId>) -> Self {
        Self { id, name, stops }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("Route {0} has no stops")]
    EmptyRoute(String),

    #[error("Route {0} is already defined")]
    DuplicateRoute(String),

    #[error("Unknown stop handle: {0}")]
    UnknownStop(StopId),

    #[error("Unknown route handle: {0}")]
    UnknownRoute(RouteId),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
