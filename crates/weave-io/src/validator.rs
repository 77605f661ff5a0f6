//! Input validation.
//!
//! Catches data-level errors before a simulation is built, with messages
//! that name the offending section.

use weave_types::{WeaveError, WeaveResult};

use crate::contract::SimulationInput;

/// Validates a complete simulation input.
///
/// Checks:
/// - Grid shape and spacing
/// - Solver parameters
/// - Run length and frame stride
/// - The floor lies below the pinned row
pub fn validate_input(input: &SimulationInput) -> WeaveResult<()> {
    input.grid.validate().map_err(|e| match e {
        WeaveError::InvalidTopology(msg) => WeaveError::InvalidTopology(format!("[grid] {msg}")),
        other => other,
    })?;

    input.solver.validate().map_err(|e| match e {
        WeaveError::InvalidConfig(msg) => WeaveError::InvalidConfig(format!("[solver] {msg}")),
        other => other,
    })?;

    if input.steps == 0 {
        return Err(WeaveError::InvalidConfig("steps must be >= 1".into()));
    }
    if input.frame_every == 0 {
        return Err(WeaveError::InvalidConfig("frame_every must be >= 1".into()));
    }

    if let Some(floor) = input.solver.floor {
        let top = input.grid.origin[1];
        if floor <= top {
            return Err(WeaveError::InvalidConfig(format!(
                "floor at y={} is not below the pinned row at y={}",
                floor, top
            )));
        }
    }

    Ok(())
}
