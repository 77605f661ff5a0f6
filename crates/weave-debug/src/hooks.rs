//! Step observers for live debugging.

use weave_contact::ContactResult;
use weave_math::{to_array, Vec2};
use weave_solver::{StepObserver, StepResult};
use weave_telemetry::{EventKind, SimulationEvent};
use weave_types::PointId;

/// Observer that records every step phase as a telemetry event.
///
/// Events accumulate until [`drain_events`](Self::drain_events) hands them
/// off, typically to an [`EventBus`](weave_telemetry::EventBus).
/// Per-pass events are numerous, so they are off unless
/// [`with_passes`](Self::with_passes) is used.
#[derive(Debug, Default)]
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
    record_passes: bool,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record one event per relaxation pass.
    pub fn with_passes(mut self) -> Self {
        self.record_passes = true;
        self
    }

    /// Appends an event the solver does not produce itself, such as an
    /// energy sample taken between steps.
    pub fn record(&mut self, step: u64, kind: EventKind) {
        self.events.push(SimulationEvent::new(step, kind));
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn name(&self) -> &str {
        "telemetry_hook"
    }
}

impl StepObserver for TelemetryHook {
    fn on_step_begin(&mut self, step: u64) {
        self.record(step, EventKind::StepBegin);
    }

    fn on_integrate(&mut self, step: u64, _integrated: u32, floor: &ContactResult) {
        if floor.resolved_count > 0 {
            self.record(
                step,
                EventKind::FloorContact {
                    count: floor.resolved_count,
                    max_penetration: floor.max_penetration,
                },
            );
        }
    }

    fn on_relaxation_pass(&mut self, step: u64, pass: u32, max_residual: f32) {
        if self.record_passes {
            self.record(step, EventKind::RelaxationPass { pass, max_residual });
        }
    }

    fn on_perturbation(&mut self, step: u64, point: PointId, displacement: Vec2) {
        self.record(
            step,
            EventKind::Perturbation {
                point: point.0,
                displacement: to_array(displacement),
            },
        );
    }

    fn on_step_complete(&mut self, result: &StepResult) {
        self.record(
            result.step,
            EventKind::StepEnd {
                wall_time: result.wall_time,
                max_residual: result.max_residual,
            },
        );
    }
}
