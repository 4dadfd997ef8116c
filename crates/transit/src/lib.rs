//! # transport-catalogue
//!
//! In-memory catalogue of public-transit stops and routes.
//!
//! ## Features
//!
//! - **Stable handles**: stops and routes live in growth-only arenas and are
//!   referred to by `StopId` / `RouteId`
//! - **Forward references**: routes and distances may name stops that are
//!   defined later; the placeholder is filled in place
//! - **Road distances**: directed measurements with reverse-pair and
//!   great-circle fallback
//! - **Route statistics**: stop counts, road and direct length, curvature
//! - **Spatial queries**: R-tree backed lookup of stops near a point
//!
//! ## Example
//!
//! ```
//! use transport_catalogue::prelude::*;
//!
//! let mut catalogue = TransportCatalogue::new();
//! catalogue.add_stop("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829));
//! catalogue.add_stop("Marushkino", Coordinates::new(55.595884, 37.209755));
//! catalogue.set_distance("Tolstopaltsevo", "Marushkino", 3900);
//!
//! let route = catalogue
//!     .add_route("750", &["Tolstopaltsevo", "Marushkino", "Tolstopaltsevo"])
//!     .unwrap();
//!
//! let stats = catalogue.route_statistics(route).unwrap();
//! assert_eq!(stats.total_stops, 3);
//! assert_eq!(stats.unique_stops, 2);
//! assert_eq!(stats.route_length, 7800);
//! assert!(stats.curvature > 1.0);
//!
//! assert!(catalogue.find_route("751").is_none());
//! ```

pub mod catalogue;
pub mod identifiers;
pub mod models;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalogue::TransportCatalogue;
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::spatial::compute_distance;
}

pub use prelude::*;
