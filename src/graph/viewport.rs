//! Viewport sizing for the radial layout
//!
//! The layout always works against a usable canvas: container measurements
//! below the floor (or nonsensical ones from a detached element) are clamped
//! up to the minimum dimensions.

use serde::{Deserialize, Serialize};

/// Minimum usable canvas width in pixels
pub const MIN_WIDTH: f32 = 800.0;
/// Minimum usable canvas height in pixels
pub const MIN_HEIGHT: f32 = 600.0;

/// Layout canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        }
    }
}

impl Viewport {
    /// Build a viewport from raw container measurements, applying the floors
    pub fn from_container(width: f32, height: f32) -> Self {
        Self {
            width: clamp_dimension(width, MIN_WIDTH),
            height: clamp_dimension(height, MIN_HEIGHT),
        }
    }

    /// Adopt new container measurements in place
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::from_container(width, height);
    }

    /// Canvas center point
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Shorter canvas side, used as the base for ring radii
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

fn clamp_dimension(value: f32, floor: f32) -> f32 {
    if value.is_finite() && value > floor {
        value
    } else {
        floor
    }
}

// ============================================================================
// TESTS
// ============================================================================
