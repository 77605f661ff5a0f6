//! Simulation input/output contract types.
//!
//! Inputs are written as TOML:
//!
//! ```toml
//! steps = 500
//!
//! [grid]
//! rows = 20
//! cols = 30
//! spacing = 10.0
//! origin = [100.0, 50.0]
//!
//! [solver]
//! relaxation_passes = 8
//! floor = 560.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weave_math::to_array;
use weave_mesh::GridSpec;
use weave_solver::{Simulation, SolverConfig};
use weave_types::{WeaveError, WeaveResult};

fn default_steps() -> u64 {
    1000
}

fn default_frame_every() -> u64 {
    1
}

/// Complete input specification for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Number of steps to run.
    #[serde(default = "default_steps")]
    pub steps: u64,

    /// Record a frame every N steps when exporting.
    #[serde(default = "default_frame_every")]
    pub frame_every: u64,

    /// Grid to build.
    #[serde(default)]
    pub grid: GridSpec,

    /// Stepper parameters.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            frame_every: default_frame_every(),
            grid: GridSpec::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl SimulationInput {
    /// Parses an input from TOML text.
    pub fn from_toml_str(text: &str) -> WeaveResult<Self> {
        toml::from_str(text)
            .map_err(|e| WeaveError::Serialization(format!("TOML parse failed: {e}")))
    }

    /// Reads an input file.
    pub fn load(path: impl AsRef<Path>) -> WeaveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> WeaveResult<String> {
        toml::to_string(self)
            .map_err(|e| WeaveError::Serialization(format!("TOML write failed: {e}")))
    }

    /// Builds the grid and the simulation described by this input.
    pub fn build(&self) -> WeaveResult<Simulation> {
        Simulation::from_spec(&self.grid, self.solver.clone())
    }
}

/// Output from a completed simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Final point positions, row-major.
    pub positions: Vec<[f32; 2]>,
    pub metrics: SimulationMetrics,
}

impl SimulationOutput {
    /// Collects the final state of `sim` with the given metrics.
    pub fn from_simulation(sim: &Simulation, metrics: SimulationMetrics) -> Self {
        Self {
            positions: sim.positions().into_iter().map(to_array).collect(),
            metrics,
        }
    }
}

/// Aggregate metrics from a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Total wall-clock time (seconds).
    pub wall_time_seconds: f64,
    /// Steps executed.
    pub step_count: u64,
    /// Kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Largest relative stick stretch after the last step.
    pub max_strain: f32,
    /// Residual of the last relaxation pass of the last step.
    pub final_residual: f32,
    /// Floor clamps summed over the run.
    pub floor_contacts: u64,
    /// Disturbances applied over the run.
    pub perturbations: u64,
}
