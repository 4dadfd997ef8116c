//! Name-keyed arenas owning stops and routes.
//!
//! Both registries only ever grow. A handle is the entity's position in its
//! arena, so no insertion can invalidate a handle issued earlier.

use std::collections::HashMap;
use std::ops::Index;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Stops
// ============================================================================

/// Outcome of an explicit stop definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopDefinition {
    /// The name had never been seen.
    Created,
    /// The name had been referenced by a route or distance clause.
    ResolvedPlaceholder,
    /// The stop was already defined; these were its old coordinates.
    Redefined(Coordinates),
}

#[derive(Clone, Debug, Default)]
pub struct StopRegistry {
    stops: Vec<Stop>,
    by_name: HashMap<Arc<str>, StopId>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a stop with real coordinates.
    pub fn define(&mut self, name: &str, coordinates: Coordinates) -> (StopId, StopDefinition) {
        if let Some(&id) = self.by_name.get(name) {
            let stop = &mut self.stops[id.index()];
            let outcome = if stop.is_placeholder() {
                StopDefinition::ResolvedPlaceholder
            } else {
                StopDefinition::Redefined(stop.coordinates())
            };
            stop.define(coordinates);
            return (id, outcome);
        }

        let id = self.allocate(name);
        self.stops[id.index()].define(coordinates);
        (id, StopDefinition::Created)
    }

    /// Existing handle for `name`, or a new placeholder.
    pub fn find_or_create(&mut self, name: &str) -> StopId {
        match self.by_name.get(name) {
            Some(&id) => id,
            None => {
                let id = self.allocate(name);
                tracing::debug!(stop = name, %id, "created placeholder stop");
                id
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<StopId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    fn allocate(&mut self, name: &str) -> StopId {
        let id = StopId::from_index(self.stops.len());
        let name: Arc<str> = name.into();
        self.stops.push(Stop::placeholder(id, name.clone()));
        self.by_name.insert(name, id);
        id
    }
}

/// Handles stored inside the catalogue always come from this registry.
impl Index<StopId> for StopRegistry {
    type Output = Stop;

    fn index(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }
}

// ============================================================================
// Routes
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
    by_name: HashMap<Arc<str>, RouteId>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a route named `name` with `stop_count` stops may be inserted.
    pub fn check_insertable(&self, name: &str, stop_count: usize) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(CatalogueError::DuplicateRoute(name.to_owned()));
        }
        if stop_count == 0 {
            return Err(CatalogueError::EmptyRoute(name.to_owned()));
        }
        Ok(())
    }

    /// Store a route over already-resolved stops.
    pub fn insert(&mut self, name: &str, stops: Vec<StopId>) -> Result<RouteId> {
        self.check_insertable(name, stops.len())?;

        let id = RouteId::from_index(self.routes.len());
        let name: Arc<str> = name.into();
        self.routes.push(Route::new(id, name.clone(), stops));
        self.by_name.insert(name, id);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<RouteId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}
