//! R-tree nodes for spatial indexing of stops.
//!
//! ## Two-Stage Filtering
//!
//! Radius queries first use Euclidean distance in degrees inside the R-tree,
//! with a radius widened for the query latitude, then apply the Haversine
//! distance to the surviving candidates.

use rstar::{PointDistance, RTreeObject, AABB};

use crate::identifiers::StopId;
use crate::models::types::Coordinates;

/// A defined stop as seen by the R-tree.
///
/// Placeholder stops are never inserted; their coordinates are not real.
#[derive(Clone, Debug, PartialEq)]
pub struct StopNode {
    pub stop: StopId,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: StopId, coordinates: Coordinates) -> Self {
        Self {
            stop,
            point: [coordinates.lng, coordinates.lat],
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.point[1], self.point[0])
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Query point in the R-tree's coordinate order.
pub fn query_point(coordinates: Coordinates) -> [f64; 2] {
    [coordinates.lng, coordinates.lat]
}
