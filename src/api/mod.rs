//! REST surface for the browser renderer

#[cfg(feature = "server")]
pub mod graph_routes;

#[cfg(feature = "server")]
pub use graph_routes::{create_family_router, FamilyApiState};
