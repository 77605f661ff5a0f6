//! Event bus connecting step observers to telemetry sinks.
//!
//! Observers queue events while a step runs; the driver flushes at step
//! boundaries so sinks only ever see whole steps. The bus keeps a running
//! [`EventTally`] of everything it has dispatched.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

/// Counts of dispatched events, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    /// Completed steps (`StepEnd` events).
    pub steps: u64,
    pub relaxation_passes: u64,
    /// Steps in which at least one point touched the floor.
    pub contact_steps: u64,
    pub perturbations: u64,
    pub energy_samples: u64,
    /// Every dispatched event, including `StepBegin` and `Custom`.
    pub total: u64,
}

impl EventTally {
    fn count(&mut self, kind: &EventKind) {
        match kind {
            EventKind::StepEnd { .. } => self.steps += 1,
            EventKind::RelaxationPass { .. } => self.relaxation_passes += 1,
            EventKind::FloorContact { .. } => self.contact_steps += 1,
            EventKind::Perturbation { .. } => self.perturbations += 1,
            EventKind::Energy { .. } => self.energy_samples += 1,
            EventKind::StepBegin | EventKind::Custom { .. } => {}
        }
        self.total += 1;
    }
}

/// Queues simulation events and fans them out to every sink on flush.
pub struct EventBus {
    queue: Sender<SimulationEvent>,
    pending: Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
    tally: EventTally,
    last_step: Option<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        let (queue, pending) = mpsc::channel();
        Self {
            queue,
            pending,
            sinks: Vec::new(),
            enabled: true,
            tally: EventTally::default(),
            last_step: None,
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// A disabled bus drops events at `emit` time.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn emit(&self, event: SimulationEvent) {
        if self.enabled {
            // The receiver is owned by `self`, so the channel is never closed.
            let _ = self.queue.send(event);
        }
    }

    /// Queues the events recorded during one or more steps, in order.
    pub fn emit_all(&self, events: impl IntoIterator<Item = SimulationEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    /// Hands every queued event to every sink. Returns how many events
    /// were dispatched.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        for event in self.pending.try_iter() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            self.tally.count(&event.kind);
            self.last_step = Some(self.last_step.map_or(event.step, |s| s.max(event.step)));
            dispatched += 1;
        }
        dispatched
    }

    /// Flushes, finalizes every sink and returns the run's tally.
    pub fn finish(&mut self) -> EventTally {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        self.tally
    }

    pub fn tally(&self) -> EventTally {
        self.tally
    }

    /// Highest step number among dispatched events.
    pub fn last_step(&self) -> Option<u64> {
        self.last_step
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
