//! # weave-math
//!
//! 2D math primitives for the Weave cloth engine.
//!
//! Provides:
//! - Re-export of `glam::Vec2` as the canonical point/vector type
//! - Separation helpers shared by the integrator and the relaxation solver
//! - Axis-aligned bounds for diagnostics and frame export

pub mod bounds;
pub mod vector;

pub use bounds::Bounds2;
pub use vector::{from_array, separation, to_array};

// Re-export glam as the canonical math type for Weave.
pub use glam::Vec2;
