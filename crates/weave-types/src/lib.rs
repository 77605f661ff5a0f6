//! # weave-types
//!
//! Shared types, identifiers, error types, and simulation defaults
//! for the Weave cloth engine.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other Weave crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{WeaveError, WeaveResult};
pub use ids::PointId;
