//! Simulation state: the cloth arrays plus the step counters.
//!
//! This is the primary mutable data structure during simulation. The
//! stepper integrates, grows and relaxes it in place each step.

use serde::{Deserialize, Serialize};
use weave_contact::{ContactResult, Floor};
use weave_math::Vec2;
use weave_mesh::ClothMesh;

use crate::config::RestLengthGrowth;

/// Mutable simulation state.
///
/// Holds the cloth (whose point array never resizes) and two counters:
/// completed steps, and the running number of per-point integrations since
/// the last disturbance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Points and sticks.
    pub mesh: ClothMesh,
    /// Steps completed so far.
    pub step: u64,
    /// Free-point integrations since the last disturbance.
    pub integration_updates: u64,
}

impl SimulationState {
    /// Wraps a mesh at step zero.
    pub fn new(mesh: ClothMesh) -> Self {
        Self {
            mesh,
            step: 0,
            integration_updates: 0,
        }
    }

    /// Verlet-integrates every free point.
    ///
    /// `velocity = (position - previous) * damping`, then
    /// `previous = position` and `position += velocity + gravity_delta`.
    /// Each integrated point is clamped against `floor` right away.
    /// Pinned points are not read or written.
    ///
    /// Returns the number of points integrated and the floor contacts.
    pub fn integrate(
        &mut self,
        gravity_delta: Vec2,
        damping: f32,
        floor: Option<Floor>,
    ) -> (u32, ContactResult) {
        let mut integrated = 0u32;
        let mut contacts = ContactResult::default();

        for p in self.mesh.points_mut() {
            if p.pinned {
                continue;
            }
            let velocity = p.velocity() * damping;
            p.previous_position = p.position;
            p.position += velocity + gravity_delta;

            if let Some(floor) = floor {
                if let Some(depth) = floor.clamp(p) {
                    contacts.resolved_count += 1;
                    contacts.max_penetration = contacts.max_penetration.max(depth);
                }
            }
            integrated += 1;
        }

        self.integration_updates += u64::from(integrated);
        (integrated, contacts)
    }

    /// Lengthens every stick shorter than `growth.cap` by `growth.rate`,
    /// without passing the cap. Returns how many sticks changed.
    pub fn grow_rest_lengths(&mut self, growth: &RestLengthGrowth) -> usize {
        let mut grown = 0;
        for s in self.mesh.sticks_mut() {
            if s.rest_length < growth.cap {
                let next = (s.rest_length + growth.rate).min(growth.cap);
                if next != s.rest_length {
                    s.rest_length = next;
                    grown += 1;
                }
            }
        }
        grown
    }

    /// Kinetic energy of the free points with unit mass:
    /// `Σ ½ |v / dt|²`. Accumulated in f64.
    pub fn kinetic_energy(&self, time_step: f32) -> f64 {
        let dt = f64::from(time_step);
        self.mesh
            .points()
            .iter()
            .filter(|p| !p.pinned)
            .map(|p| {
                let v = p.velocity();
                let speed2 = f64::from(v.x) * f64::from(v.x) + f64::from(v.y) * f64::from(v.y);
                0.5 * speed2 / (dt * dt)
            })
            .sum()
    }

    /// Largest relative stretch `|length - rest| / rest` over all sticks
    /// with a positive rest length.
    pub fn max_strain(&self) -> f32 {
        let points = self.mesh.points();
        self.mesh
            .sticks()
            .iter()
            .filter(|s| s.rest_length > 0.0)
            .map(|s| (s.current_length(points) - s.rest_length).abs() / s.rest_length)
            .fold(0.0, f32::max)
    }
}
