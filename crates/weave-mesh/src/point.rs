//! Verlet mass points.

use serde::{Deserialize, Serialize};
use weave_math::Vec2;

/// A simulated mass node with implicit velocity.
///
/// Velocity is never stored: it is `position - previous_position`.
/// A pinned point acts as an infinite-mass anchor and its position
/// never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Current position.
    pub position: Vec2,
    /// Position at the previous step.
    pub previous_position: Vec2,
    /// Pinned points are skipped by integration and correction.
    pub pinned: bool,
}

impl Point {
    /// Creates a free point at rest.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            pinned: false,
        }
    }

    /// Creates a pinned anchor.
    pub fn anchored(position: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            pinned: true,
        }
    }

    /// Per-step displacement (implicit velocity).
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Inverse mass used to split corrections: `0.0` for anchors.
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.pinned {
            0.0
        } else {
            1.0
        }
    }
}
