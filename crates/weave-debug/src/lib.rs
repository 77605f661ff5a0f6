//! # weave-debug
//!
//! Inspection hooks and state snapshots for debugging simulation issues.
//! A [`TelemetryHook`] turns step callbacks into telemetry events; a
//! [`StateSnapshot`] captures the point array in compact binary form.

pub mod hooks;
pub mod snapshot;

pub use hooks::TelemetryHook;
pub use snapshot::StateSnapshot;
