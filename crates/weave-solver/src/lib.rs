//! # weave-solver
//!
//! Time integration, constraint relaxation, and simulation state.
//!
//! ## Key Types
//!
//! - [`Simulation`]: Owns the cloth, the config, the relaxation strategy
//!   and the disturbance RNG; `step()` advances one frame
//! - [`SimulationState`]: Point/stick arrays plus step counters
//! - [`SolverConfig`]: Gravity, time step, passes, floor, growth, seed
//! - [`SolverStrategy`]: Pluggable relaxation pass (sequential or batched)
//! - [`StepObserver`]: Phase-level callbacks for telemetry and debugging

pub mod colored;
pub mod config;
pub mod observer;
pub mod perturbation;
pub mod relaxation;
pub mod simulation;
pub mod state;
pub mod strategy;

pub use colored::ColoredRelaxation;
pub use config::{Perturbation, RelaxationKind, RestLengthGrowth, SolverConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use relaxation::GaussSeidelRelaxation;
pub use simulation::{Simulation, StepResult};
pub use state::SimulationState;
pub use strategy::SolverStrategy;
