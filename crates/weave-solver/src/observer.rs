//! Step observer trait for monitoring simulation progress.

use weave_contact::ContactResult;
use weave_math::Vec2;
use weave_types::PointId;

use crate::simulation::StepResult;

/// Callbacks invoked at fixed points inside `Simulation::step_observed`.
///
/// All methods default to no-ops. Observers receive values, never the
/// point array, so they cannot see a half-relaxed cloth.
///
/// # Lifecycle
///
/// ```text
/// for each step:
///   on_step_begin
///   on_integrate
///   for each relaxation pass:
///     on_relaxation_pass
///   on_perturbation        (only when a disturbance fires)
///   on_step_complete
/// ```
pub trait StepObserver {
    fn on_step_begin(&mut self, step: u64) {
        let _ = step;
    }

    /// Called after the integration phase.
    fn on_integrate(&mut self, step: u64, integrated: u32, floor: &ContactResult) {
        let _ = (step, integrated, floor);
    }

    /// Called after each relaxation pass with the largest length error
    /// seen during that pass.
    fn on_relaxation_pass(&mut self, step: u64, pass: u32, max_residual: f32) {
        let _ = (step, pass, max_residual);
    }

    /// Called when a random disturbance moves a point.
    fn on_perturbation(&mut self, step: u64, point: PointId, displacement: Vec2) {
        let _ = (step, point, displacement);
    }

    /// Called when the step is fully complete.
    fn on_step_complete(&mut self, result: &StepResult) {
        let _ = result;
    }
}

/// A no-op observer. Used by `Simulation::step`.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
