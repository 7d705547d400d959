//! Core graph data model
//!
//! `FamilyGraph` is the working representation shared by the builder, the
//! level assigner, and the radial positioner: nodes live in an arena `Vec`
//! with a private id index so the traversal stages address them by `usize`
//! instead of cloning key strings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use uuid::Uuid;

use crate::catalog::RelationDescriptor;
use crate::graph::viewport::Viewport;

/// One neighbour reference stored on the source side of a relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub person_id: String,
    pub relation: String,
    pub descriptor: RelationDescriptor,
}

/// A person placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GraphNode {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// True only for the focal person
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_center: bool,
    pub x: f32,
    pub y: f32,
    /// Hops from the focal person; `None` when no path reaches this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Neighbours listed where this node is the relationship source
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub adjacency: SmallVec<[AdjacencyEntry; 4]>,
}

/// A relationship drawn between two placed nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub relation: String,
    pub descriptor: RelationDescriptor,
}

/// Aggregate counts for a built graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub nodes_by_level: HashMap<u32, usize>,
    pub unreached_nodes: usize,
    /// Wall-clock build time in milliseconds
    pub build_ms: u64,
}

/// The complete family graph for one focal person
///
/// Serialize-only: the id index cannot survive a round trip, so the wire
/// shape is `GraphView`, which carries plain node and edge lists.
#[derive(Debug, Clone, Serialize, Default)]
pub struct FamilyGraph {
    pub focus_id: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub stats: GraphStats,
    /// Person id to arena position; never serialized
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FamilyGraph {
    pub fn new(focus_id: impl Into<String>) -> Self {
        Self {
            focus_id: focus_id.into(),
            ..Default::default()
        }
    }

    /// Append a node and index it; a duplicate id keeps the first record
    pub fn add_node(&mut self, node: GraphNode) -> usize {
        if let Some(&existing) = self.index.get(&node.id) {
            return existing;
        }
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        idx
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index(id).map(|idx| &self.nodes[idx])
    }

    /// Recompute the aggregate counters from the current nodes and edges
    pub fn compute_stats(&mut self) {
        let mut nodes_by_level: HashMap<u32, usize> = HashMap::new();
        let mut unreached = 0;
        for node in &self.nodes {
            match node.level {
                Some(level) => *nodes_by_level.entry(level).or_insert(0) += 1,
                None => unreached += 1,
            }
        }
        self.stats.total_nodes = self.nodes.len();
        self.stats.total_edges = self.edges.len();
        self.stats.nodes_by_level = nodes_by_level;
        self.stats.unreached_nodes = unreached;
    }
}

/// Response envelope handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphView {
    pub query_id: Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub focus_id: String,
    pub viewport: Viewport,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub stats: GraphStats,
}

impl GraphView {
    pub fn from_graph(graph: FamilyGraph, viewport: Viewport) -> Self {
        let FamilyGraph {
            focus_id,
            nodes,
            edges,
            stats,
            ..
        } = graph;
        Self {
            query_id: Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            focus_id,
            viewport,
            nodes,
            edges,
            stats,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !value
}
