//! Catalogue data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::TransitCatalogue;
pub use types::{CatalogueError, Coordinates, Result, Route, RouteStatistics, Stop};
