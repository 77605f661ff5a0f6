//! Simulation event types.
//!
//! Lightweight value types emitted at fixed points of each step, carrying
//! just enough data to monitor convergence and spot anomalies.

use serde::{Deserialize, Serialize};

/// A simulation event tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (1-indexed, matching `StepResult::step`).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin,

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
        /// Residual after the last relaxation pass.
        max_residual: f32,
    },

    /// One relaxation pass over all sticks.
    RelaxationPass {
        /// Pass number within the step.
        pass: u32,
        /// Largest stick length error seen during the pass.
        max_residual: f32,
    },

    /// Points clamped by the floor during integration.
    FloorContact {
        count: u32,
        max_penetration: f32,
    },

    /// A free point was displaced by the disturbance rule.
    Perturbation {
        point: u32,
        displacement: [f32; 2],
    },

    /// Energy snapshot at the end of a step.
    Energy {
        /// Kinetic energy of free points (unit mass).
        kinetic: f64,
        /// Largest relative stick stretch.
        max_strain: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
