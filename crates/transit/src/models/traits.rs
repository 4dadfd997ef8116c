//! Read-side interface of the catalogue.
//!
//! Consumers that only answer queries (statistics printers, exporters) depend
//! on this trait rather than on the concrete catalogue.

use std::collections::BTreeSet;

use crate::identifiers::*;
use crate::models::types::*;

pub trait TransitCatalogue: Send + Sync {
    // ---- Lookups ----
    fn find_stop(&self, name: &str) -> Option<StopId>;
    fn find_route(&self, name: &str) -> Option<RouteId>;
    fn stop(&self, id: StopId) -> Option<&Stop>;
    fn route(&self, id: RouteId) -> Option<&Route>;

    // ---- Queries ----

    /// Statistics for a route issued by this catalogue
    fn route_statistics(&self, id: RouteId) -> Result<RouteStatistics>;

    /// Routes visiting a stop; empty for a stop no route visits
    fn routes_by_stop(&self, id: StopId) -> Result<&BTreeSet<RouteId>>;

    /// Names of the routes visiting a stop, sorted
    fn route_names_by_stop(&self, id: StopId) -> Result<Vec<&str>> {
        let mut names: Vec<&str> = self
            .routes_by_stop(id)?
            .iter()
            .filter_map(|route_id| self.route(*route_id))
            .map(Route::name)
            .collect();
        names.sort_unstable();
        Ok(names)
    }
}
