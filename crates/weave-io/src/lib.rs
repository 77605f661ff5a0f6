//! # weave-io
//!
//! Simulation input/output contract and input validation.
//!
//! Defines the boundary types that external callers (CLI, scripts) use to
//! describe a run and read back its results.

pub mod contract;
pub mod validator;

pub use contract::{SimulationInput, SimulationMetrics, SimulationOutput};
pub use validator::validate_input;
