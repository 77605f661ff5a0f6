//! Batched relaxation over conflict-free stick colors.
//!
//! Sticks are grouped once into batches that share no endpoint. Within a
//! batch the corrections are independent, so they are computed in parallel
//! with rayon and then applied; batches run one after another. The visiting
//! order differs from the sequential sweep, so trajectories differ from
//! [`GaussSeidelRelaxation`](crate::relaxation::GaussSeidelRelaxation), but
//! they are still deterministic.

use rayon::prelude::*;
use weave_contact::StickColoring;
use weave_mesh::{ClothMesh, Point, Stick};

use crate::relaxation::{apply_correction, stick_correction, StickCorrection};
use crate::strategy::SolverStrategy;

/// Conflict-free parallel relaxation.
#[derive(Debug, Default)]
pub struct ColoredRelaxation {
    batches: Vec<Vec<usize>>,
    scratch: Vec<StickCorrection>,
}

impl ColoredRelaxation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of color batches. Zero before `prepare`.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}

impl SolverStrategy for ColoredRelaxation {
    fn prepare(&mut self, mesh: &ClothMesh) {
        self.batches = StickColoring::color_sticks(mesh.sticks(), mesh.point_count());
        tracing::debug!(
            sticks = mesh.stick_count(),
            batches = self.batches.len(),
            "colored stick batches"
        );
    }

    fn relax_pass(&mut self, points: &mut [Point], sticks: &[Stick], stiffness: f32) -> f32 {
        let mut max_residual = 0.0_f32;

        for batch in &self.batches {
            let read_only: &[Point] = points;
            batch
                .par_iter()
                .map(|&si| stick_correction(read_only, &sticks[si], stiffness))
                .collect_into_vec(&mut self.scratch);

            for (&si, c) in batch.iter().zip(&self.scratch) {
                apply_correction(points, &sticks[si], c);
                max_residual = max_residual.max(c.residual);
            }
        }

        max_residual
    }

    fn name(&self) -> &str {
        "colored"
    }
}
