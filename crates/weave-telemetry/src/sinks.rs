//! Pluggable event sinks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::Level;

use crate::events::SimulationEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Read handle onto the events collected by a [`VecSink`].
///
/// The sink itself is boxed into the bus, so this handle is how tests and
/// callers look at what it received.
#[derive(Debug, Clone, Default)]
pub struct SharedEvents(Arc<Mutex<Vec<SimulationEvent>>>);

impl SharedEvents {
    fn lock(&self) -> MutexGuard<'_, Vec<SimulationEvent>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies out every event received so far.
    pub fn snapshot(&self) -> Vec<SimulationEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// A sink that collects events in memory, for testing and inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    events: SharedEvents,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that stays valid after the sink is moved into a bus.
    pub fn events(&self) -> SharedEvents {
        self.events.clone()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.lock().push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        // `tracing` macros need a constant level.
        let (step, kind) = (event.step, &event.kind);
        if self.level == Level::ERROR {
            tracing::error!(step, event = ?kind, "simulation_event");
        } else if self.level == Level::WARN {
            tracing::warn!(step, event = ?kind, "simulation_event");
        } else if self.level == Level::INFO {
            tracing::info!(step, event = ?kind, "simulation_event");
        } else if self.level == Level::DEBUG {
            tracing::debug!(step, event = ?kind, "simulation_event");
        } else {
            tracing::trace!(step, event = ?kind, "simulation_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
