//! Geographic distance and spatial indexing.

pub mod index;
pub mod queries;

pub use queries::{compute_distance, meters_to_degrees, search_radius_degrees};
