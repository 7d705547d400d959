//! Radial positioner
//!
//! Places the focal person at the canvas center and each BFS level on a
//! concentric ring, nodes spread at equal angles in arena order. Unreached
//! nodes share one extra ring outside the last reached level.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::graph::types::{FamilyGraph, GraphNode};
use crate::graph::viewport::Viewport;

/// Tunable layout constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Ring radius per level as a fraction of the shorter canvas side
    pub ring_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { ring_scale: 0.15 }
    }
}

/// Concentric-ring placement over an already levelled graph
#[derive(Debug, Clone, Default)]
pub struct RadialLayout {
    config: LayoutConfig,
}

impl RadialLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Assign x/y to every node in the graph
    pub fn position(&self, graph: &mut FamilyGraph, viewport: &Viewport) {
        let (cx, cy) = viewport.center();
        let base_radius = viewport.min_side() * self.config.ring_scale;

        let mut center: Option<usize> = None;
        let mut rings: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        let mut unreached: Vec<usize> = Vec::new();
        let mut max_level = 0u32;

        for (idx, node) in graph.nodes.iter().enumerate() {
            match node.level {
                Some(0) => center = Some(idx),
                Some(level) => {
                    max_level = max_level.max(level);
                    rings.entry(level).or_default().push(idx);
                }
                None => unreached.push(idx),
            }
        }

        if let Some(idx) = center {
            graph.nodes[idx].x = cx;
            graph.nodes[idx].y = cy;
        }

        for (level, indices) in &rings {
            place_ring(&mut graph.nodes, indices, base_radius * *level as f32, cx, cy);
        }

        if !unreached.is_empty() {
            // One ring past the farthest reached level; ring 1 when nothing
            // was reached.
            let outer = base_radius * (max_level + 1) as f32;
            place_ring(&mut graph.nodes, &unreached, outer, cx, cy);
        }
    }
}

/// Spread the given nodes evenly around a circle, starting at angle zero
fn place_ring(nodes: &mut [GraphNode], indices: &[usize], radius: f32, cx: f32, cy: f32) {
    let step = TAU / indices.len() as f32;
    for (i, &idx) in indices.iter().enumerate() {
        let angle = i as f32 * step;
        nodes[idx].x = cx + radius * angle.cos();
        nodes[idx].y = cy + radius * angle.sin();
    }
}
