//! Route statistics in a single pass over the stop sequence.

use std::collections::HashSet;

use crate::catalogue::distances::DistanceTable;
use crate::catalogue::registry::StopRegistry;
use crate::models::types::{Route, RouteStatistics, Stop};
use crate::spatial::queries::compute_distance;

pub fn compute(route: &Route, stops: &StopRegistry, distances: &DistanceTable) -> RouteStatistics {
    let mut seen = HashSet::with_capacity(route.stops().len());
    let mut previous: Option<&Stop> = None;
    let mut route_length = 0u64;
    let mut route_length_direct = 0.0f64;

    for &id in route.stops() {
        let stop = &stops[id];
        seen.insert(id);

        if let Some(prev) = previous {
            route_length += u64::from(distances.resolve(prev, stop));
            route_length_direct += compute_distance(prev.coordinates(), stop.coordinates());
        }
        previous = Some(stop);
    }

    let curvature = if route_length_direct > 0.0 {
        route_length as f64 / route_length_direct
    } else {
        0.0
    };

    RouteStatistics {
        total_stops: route.stops().len(),
        unique_stops: seen.len(),
        route_length,
        route_length_direct,
        curvature,
    }
}
