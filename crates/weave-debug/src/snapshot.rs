//! State snapshot serialization for replay and debugging.
//!
//! Snapshots capture the point array at a step boundary, enabling
//! diff-based debugging between runs.

use serde::{Deserialize, Serialize};
use weave_math::to_array;
use weave_mesh::Point;
use weave_solver::Simulation;
use weave_types::{WeaveError, WeaveResult};

/// Point state at the end of a step.
///
/// Serialized with `bincode` for compact binary output. Positions are
/// interleaved: `[x0, y0, x1, y1, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Steps completed when the snapshot was taken.
    pub step: u64,
    pub rows: usize,
    pub cols: usize,
    pub positions: Vec<f32>,
    pub previous_positions: Vec<f32>,
    pub pinned: Vec<bool>,
}

impl StateSnapshot {
    /// Captures raw point data.
    pub fn from_points(step: u64, rows: usize, cols: usize, points: &[Point]) -> Self {
        let mut positions = Vec::with_capacity(points.len() * 2);
        let mut previous_positions = Vec::with_capacity(points.len() * 2);
        let mut pinned = Vec::with_capacity(points.len());

        for p in points {
            positions.extend_from_slice(&to_array(p.position));
            previous_positions.extend_from_slice(&to_array(p.previous_position));
            pinned.push(p.pinned);
        }

        Self {
            step,
            rows,
            cols,
            positions,
            previous_positions,
            pinned,
        }
    }

    /// Captures the current state of a simulation.
    pub fn capture(sim: &Simulation) -> Self {
        let mesh = sim.mesh();
        Self::from_points(sim.step_count(), mesh.rows(), mesh.cols(), mesh.points())
    }

    /// Number of points captured.
    pub fn point_count(&self) -> usize {
        self.pinned.len()
    }

    /// Largest per-point displacement between the two snapshots.
    ///
    /// Returns `None` when the point counts differ.
    pub fn max_deviation(&self, other: &StateSnapshot) -> Option<f32> {
        if self.positions.len() != other.positions.len() {
            return None;
        }
        let max = self
            .positions
            .chunks_exact(2)
            .zip(other.positions.chunks_exact(2))
            .map(|(a, b)| ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt())
            .fold(0.0, f32::max);
        Some(max)
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WeaveResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| WeaveError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> WeaveResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            WeaveError::Serialization(format!("snapshot deserialization failed: {}", e))
        })?;

        let n = snapshot.pinned.len();
        if snapshot.positions.len() != 2 * n
            || snapshot.previous_positions.len() != 2 * n
            || snapshot.rows.checked_mul(snapshot.cols) != Some(n)
        {
            return Err(WeaveError::Serialization(format!(
                "snapshot arrays disagree: {} points, {} coords, {} previous, {}x{}",
                n,
                snapshot.positions.len(),
                snapshot.previous_positions.len(),
                snapshot.rows,
                snapshot.cols
            )));
        }
        Ok(snapshot)
    }
}
