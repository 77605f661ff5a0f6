//! Simulation defaults.
//!
//! Units are screen-space: lengths in pixels, +y pointing down, and one
//! implicit time unit per `step()`.

/// Downward gravitational acceleration.
pub const GRAVITY: f32 = 0.5;

/// Fixed per-step time interval used to scale gravity (`g * dt²`).
pub const DEFAULT_TIME_STEP: f32 = 0.1;

/// Number of Gauss–Seidel relaxation passes per step.
pub const DEFAULT_RELAXATION_PASSES: u32 = 5;

/// Fraction of a stick's length error removed each time it is visited.
pub const DEFAULT_STIFFNESS: f32 = 0.5;

/// Velocity retention factor. `1.0` keeps all momentum.
pub const DEFAULT_DAMPING: f32 = 1.0;

/// Default spacing between neighbouring grid points.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Default floor height (the bottom edge of an 800×600 viewport).
pub const DEFAULT_FLOOR_Y: f32 = 600.0;

/// Accumulated integration updates between two random disturbances.
pub const DEFAULT_PERTURBATION_INTERVAL: u64 = 5_000_000;

/// Displacement applied by a random disturbance.
pub const DEFAULT_PERTURBATION_MAGNITUDE: f32 = 60.0;

/// Default seed for the disturbance generator.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Lengths below this are treated as zero by the solver.
pub const EPSILON: f32 = 1.0e-7;
