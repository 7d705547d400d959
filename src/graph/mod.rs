//! Family graph pipeline: build, level, position
//!
//! The stages are pure and run in a fixed order. `engine::build_graph` is
//! the one-call entry point; the submodules stay public for callers that
//! want a single stage.

pub mod builder;
pub mod engine;
pub mod layout;
pub mod levels;
pub mod types;
pub mod viewport;

pub use builder::build_nodes_and_edges;
pub use engine::{build_graph, GraphEngine};
pub use layout::{LayoutConfig, RadialLayout};
pub use levels::assign_levels;
pub use types::{AdjacencyEntry, FamilyGraph, GraphEdge, GraphNode, GraphStats, GraphView};
pub use viewport::{Viewport, MIN_HEIGHT, MIN_WIDTH};
