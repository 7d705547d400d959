//! BFS level assignment
//!
//! Levels are shortest-path hop counts from the focal person over the edge
//! list treated as undirected. Nodes no path reaches keep `level: None` and
//! are handled by the positioner's outer ring.

use std::collections::{HashSet, VecDeque};
use tracing::warn;

use crate::graph::types::FamilyGraph;

/// Assign hop levels outward from the focal person
pub fn assign_levels(graph: &mut FamilyGraph, focal_id: &str) {
    let start = match graph.node_index(focal_id) {
        Some(idx) => idx,
        None => {
            warn!(focal_id, "focal person not in graph, levels unassigned");
            return;
        }
    };

    let adjacency = adjacency_index(graph);
    let mut visited: HashSet<usize> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    graph.nodes[start].level = Some(0);
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next_level = graph.nodes[current].level.unwrap_or(0) + 1;
        for &neighbour in &adjacency[current] {
            if visited.insert(neighbour) {
                graph.nodes[neighbour].level = Some(next_level);
                queue.push_back(neighbour);
            }
        }
    }
}

/// Undirected neighbour lists in arena order, built once per traversal
fn adjacency_index(graph: &FamilyGraph) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); graph.nodes.len()];
    for edge in &graph.edges {
        let source = match graph.node_index(&edge.source) {
            Some(idx) => idx,
            None => continue,
        };
        let target = match graph.node_index(&edge.target) {
            Some(idx) => idx,
            None => continue,
        };
        adjacency[source].push(target);
        adjacency[target].push(source);
    }
    adjacency
}
