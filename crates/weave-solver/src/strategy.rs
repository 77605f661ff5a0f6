//! Solver strategy trait: the relaxation seam.
//!
//! Integration, floor contact, and the growth/disturbance hooks are fixed;
//! only the way one relaxation pass visits the sticks is pluggable.

use weave_mesh::{ClothMesh, Point, Stick};

/// Trait for relaxation strategies.
///
/// The simulation calls these methods in order:
///
/// ```text
/// strategy.prepare(mesh);
/// loop {
///     for pass in 0..passes {
///         strategy.relax_pass(points, sticks, stiffness);
///     }
/// }
/// ```
///
/// # Implementations
///
/// - [`GaussSeidelRelaxation`](crate::relaxation::GaussSeidelRelaxation): sequential, reference behaviour
/// - [`ColoredRelaxation`](crate::colored::ColoredRelaxation): conflict-free parallel batches
pub trait SolverStrategy: Send {
    /// Precompute anything that depends on topology.
    ///
    /// Called once at construction; the stick list never changes length
    /// afterwards, so the result stays valid for the whole run.
    fn prepare(&mut self, mesh: &ClothMesh);

    /// Run one relaxation pass over all sticks.
    ///
    /// Returns the largest absolute length error observed before each
    /// stick's correction.
    fn relax_pass(&mut self, points: &mut [Point], sticks: &[Stick], stiffness: f32) -> f32;

    /// Returns the strategy's name.
    fn name(&self) -> &str;
}
