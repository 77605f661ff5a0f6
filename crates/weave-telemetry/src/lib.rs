//! # weave-telemetry
//!
//! Event bus for simulation telemetry. Emits structured per-step events
//! (timing, relaxation residuals, floor contacts, disturbances, energy)
//! that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::{EventBus, EventTally};
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, SharedEvents, TracingSink, VecSink};
