//! # Kin-Graph - Family Relationship Graph Engine
//!
//! Builds a positioned family graph around one focal person: backend
//! records become nodes and edges, BFS assigns hop levels, and the radial
//! positioner places each level on a concentric ring sized to the viewport.
//!
//! ## Pipeline
//!
//! ```text
//! people + relationships -> builder -> level assigner -> positioner -> GraphView
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kin_graph::backend::{PersonRecord, RelationParty, RelationshipRecord};
//! use kin_graph::graph::{build_graph, LayoutConfig, Viewport};
//!
//! let people = vec![
//!     PersonRecord { id: "alice".into(), name: Some("Alice".into()), ..Default::default() },
//!     PersonRecord { id: "bob".into(), name: Some("Bob".into()), ..Default::default() },
//! ];
//! let relationships = vec![RelationshipRecord {
//!     id: "r1".into(),
//!     user: RelationParty { id: "alice".into() },
//!     with_user: "bob".into(),
//!     relation: "parent".into(),
//! }];
//!
//! let viewport = Viewport::from_container(800.0, 600.0);
//! let graph = build_graph(&people, &relationships, "alice", &viewport, &LayoutConfig::default());
//!
//! let alice = graph.node("alice").unwrap();
//! assert_eq!((alice.x, alice.y), (400.0, 300.0));
//! assert_eq!(graph.node("bob").and_then(|n| n.level), Some(1));
//! ```

// Core pipeline
pub mod catalog;
pub mod error;
pub mod graph;

// Data access and orchestration
pub mod backend;
pub mod config;
pub mod session;

// REST surface
#[cfg(feature = "server")]
pub mod api;

pub use catalog::{RelationDescriptor, RelationshipCatalog};
pub use error::{BackendError, BackendResult, ConfigError, GraphError, GraphResult};
pub use graph::{
    build_graph, FamilyGraph, GraphEngine, GraphNode, GraphStats, GraphView, LayoutConfig,
    RadialLayout, Viewport,
};
pub use session::GraphSession;
