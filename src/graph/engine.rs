//! Pipeline orchestration
//!
//! `build_graph` runs the three stages in order over one set of records.
//! `GraphEngine` keeps the latest records plus the focal person and viewport
//! so recenter and resize can re-run the pipeline without refetching.

use std::time::Instant;

use tracing::info;

use crate::backend::types::{PersonRecord, RelationshipRecord};
use crate::graph::builder::build_nodes_and_edges;
use crate::graph::layout::{LayoutConfig, RadialLayout};
use crate::graph::levels::assign_levels;
use crate::graph::types::{FamilyGraph, GraphView};
use crate::graph::viewport::Viewport;

/// Run builder, level assigner and positioner over one snapshot of records
pub fn build_graph(
    people: &[PersonRecord],
    relationships: &[RelationshipRecord],
    focal_id: &str,
    viewport: &Viewport,
    config: &LayoutConfig,
) -> FamilyGraph {
    let started = Instant::now();

    let mut graph = build_nodes_and_edges(people, relationships, focal_id);
    assign_levels(&mut graph, focal_id);
    RadialLayout::with_config(*config).position(&mut graph, viewport);

    graph.compute_stats();
    graph.stats.build_ms = started.elapsed().as_millis() as u64;
    info!(
        focal_id,
        nodes = graph.stats.total_nodes,
        edges = graph.stats.total_edges,
        unreached = graph.stats.unreached_nodes,
        build_ms = graph.stats.build_ms,
        "family graph built"
    );

    graph
}

/// Stateful wrapper around the pipeline for interactive sessions
#[derive(Debug, Clone)]
pub struct GraphEngine {
    people: Vec<PersonRecord>,
    relationships: Vec<RelationshipRecord>,
    focal_id: String,
    viewport: Viewport,
    config: LayoutConfig,
}

impl GraphEngine {
    pub fn new(focal_id: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            people: Vec::new(),
            relationships: Vec::new(),
            focal_id: focal_id.into(),
            viewport,
            config: LayoutConfig::default(),
        }
    }

    /// Swap in a fresh snapshot of backend records
    pub fn replace_data(
        &mut self,
        people: Vec<PersonRecord>,
        relationships: Vec<RelationshipRecord>,
    ) {
        self.people = people;
        self.relationships = relationships;
    }

    /// Make another person the center; a no-op focal change still rebuilds
    pub fn recenter(&mut self, focal_id: impl Into<String>) -> GraphView {
        self.focal_id = focal_id.into();
        self.rebuild()
    }

    /// Adopt new container measurements and relayout
    pub fn resize(&mut self, width: f32, height: f32) -> GraphView {
        self.viewport.resize(width, height);
        self.rebuild()
    }

    pub fn focal_id(&self) -> &str {
        &self.focal_id
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Run the full pipeline over the held records
    pub fn rebuild(&self) -> GraphView {
        let graph = build_graph(
            &self.people,
            &self.relationships,
            &self.focal_id,
            &self.viewport,
            &self.config,
        );
        GraphView::from_graph(graph, self.viewport)
    }
}
