//! Floor collision.
//!
//! Screen-space convention: +y points down, so the floor is the largest
//! y value a free point may take.

use serde::{Deserialize, Serialize};
use weave_mesh::Point;

use crate::response::ContactResult;

/// A horizontal floor at `y = height`.
///
/// Collision is one-sided and inelastic: only the vertical coordinate is
/// clamped, and `previous_position` is left alone, so a point driven into
/// the floor keeps hitting it and sticks rather than bouncing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Height of the floor (maximum y).
    pub height: f32,
}

impl Floor {
    /// Creates a floor at the given height.
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    /// Clamps a single point. Returns the penetration depth if it was below
    /// the floor. Pinned points are never touched.
    #[inline]
    pub fn clamp(&self, point: &mut Point) -> Option<f32> {
        if point.pinned {
            return None;
        }
        let depth = point.position.y - self.height;
        if depth > 0.0 {
            point.position.y = self.height;
            Some(depth)
        } else {
            None
        }
    }

    /// Resolve floor contacts for every free point.
    pub fn resolve(&self, points: &mut [Point]) -> ContactResult {
        let mut result = ContactResult::default();
        for p in points.iter_mut() {
            if let Some(depth) = self.clamp(p) {
                result.resolved_count += 1;
                result.max_penetration = result.max_penetration.max(depth);
            }
        }
        result
    }
}
