//! Distance sticks between two points.

use serde::{Deserialize, Serialize};
use weave_types::PointId;

use crate::point::Point;

/// Which role a stick plays in the cloth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickKind {
    /// Horizontal or vertical neighbour link; resists stretching.
    Structural,
    /// Diagonal link across a grid cell; resists shearing.
    Shear,
    /// Two-hop horizontal or vertical link; resists folding.
    Bend,
}

/// A distance relationship between two points.
///
/// Endpoints are stable indices into the point array, never references.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    /// First endpoint.
    pub a: PointId,
    /// Second endpoint.
    pub b: PointId,
    /// Length the stick tries to maintain.
    pub rest_length: f32,
    /// Structural, shear, or bend.
    pub kind: StickKind,
}

impl Stick {
    /// Creates a stick with an explicit rest length.
    pub fn new(a: PointId, b: PointId, rest_length: f32, kind: StickKind) -> Self {
        Self {
            a,
            b,
            rest_length,
            kind,
        }
    }

    /// Creates a stick whose rest length is the current distance between
    /// its endpoints in `points`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds for `points`.
    pub fn between(a: PointId, b: PointId, points: &[Point], kind: StickKind) -> Self {
        let rest_length = points[a.index()]
            .position
            .distance(points[b.index()].position);
        Self::new(a, b, rest_length, kind)
    }

    /// Current length of the stick given the point array.
    #[inline]
    pub fn current_length(&self, points: &[Point]) -> f32 {
        points[self.a.index()]
            .position
            .distance(points[self.b.index()].position)
    }

    /// Returns true if the stick touches `p`.
    #[inline]
    pub fn touches(&self, p: PointId) -> bool {
        self.a == p || self.b == p
    }
}
