//! Measured road distances between stops.
//!
//! Measurements are directed. A missing `(a, b)` entry falls back to the
//! `(b, a)` entry, and a pair measured in neither direction falls back to the
//! rounded great-circle distance between the two stops.

use std::collections::HashMap;

use crate::identifiers::StopId;
use crate::models::types::Stop;
use crate::spatial::queries::compute_distance;

#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    measured: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directed measurement, replacing any earlier one for the pair.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u32) {
        self.measured.insert((from, to), meters);
    }

    /// The explicit `from -> to` measurement, if any.
    pub fn measured(&self, from: StopId, to: StopId) -> Option<u32> {
        self.measured.get(&(from, to)).copied()
    }

    /// Road distance between two stops, in meters.
    pub fn resolve(&self, from: &Stop, to: &Stop) -> u32 {
        if let Some(meters) = self.measured(from.id(), to.id()) {
            return meters;
        }
        if let Some(meters) = self.measured(to.id(), from.id()) {
            tracing::trace!(from = from.name(), to = to.name(), "using reverse measurement");
            return meters;
        }

        tracing::trace!(from = from.name(), to = to.name(), "no measurement, using great-circle distance");
        compute_distance(from.coordinates(), to.coordinates()).round() as u32
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }
}
