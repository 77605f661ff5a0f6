//! Solver configuration.
//!
//! Parameters that control the stepper: gravity, the fixed time step,
//! relaxation passes and stiffness, the floor, and the optional
//! rest-length growth and disturbance rules.

use serde::{Deserialize, Serialize};
use weave_types::constants;
use weave_types::{WeaveError, WeaveResult};

/// Which relaxation strategy the simulation uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationKind {
    /// Sequential Gauss–Seidel sweep in stick emission order.
    #[default]
    GaussSeidel,
    /// Conflict-free batches corrected in parallel. Numerically different
    /// from the sequential sweep.
    Colored,
}

/// Per-step rest-length lengthening: `rest = min(cap, rest + rate)`.
///
/// Only sticks shorter than `cap` grow; longer sticks are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestLengthGrowth {
    /// Length added to each growing stick per step.
    pub rate: f32,
    /// Length at which growth stops.
    pub cap: f32,
}

/// Periodic random disturbance of one free point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    /// Accumulated per-point integration updates between disturbances.
    pub interval: u64,
    /// Length of the random displacement.
    pub magnitude: f32,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            interval: constants::DEFAULT_PERTURBATION_INTERVAL,
            magnitude: constants::DEFAULT_PERTURBATION_MAGNITUDE,
        }
    }
}

/// Configuration for the simulation stepper.
///
/// Gravity is applied in velocity form, `gravity * time_step²` per step,
/// and the config is frozen once a [`Simulation`](crate::Simulation) is
/// built, so the effective gravity never changes mid-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Gravity vector [gx, gy]. +y points down.
    pub gravity: [f32; 2],

    /// Fixed time interval per `step()`.
    pub time_step: f32,

    /// Relaxation passes per step. More passes give a stiffer cloth.
    pub relaxation_passes: u32,

    /// Fraction of a stick's length error removed per visit, in (0, 1].
    pub stiffness: f32,

    /// Velocity retention per step, in [0, 1]. 1.0 = no damping.
    pub damping: f32,

    /// Floor height (maximum y). `None` disables floor collision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<f32>,

    /// Seed for the disturbance generator.
    pub seed: u64,

    /// Relaxation strategy.
    pub relaxation: RelaxationKind,

    /// Optional rest-length growth rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<RestLengthGrowth>,

    /// Optional periodic disturbance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perturbation: Option<Perturbation>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, constants::GRAVITY],
            time_step: constants::DEFAULT_TIME_STEP,
            relaxation_passes: constants::DEFAULT_RELAXATION_PASSES,
            stiffness: constants::DEFAULT_STIFFNESS,
            damping: constants::DEFAULT_DAMPING,
            floor: Some(constants::DEFAULT_FLOOR_Y),
            seed: constants::DEFAULT_SEED,
            relaxation: RelaxationKind::GaussSeidel,
            growth: None,
            perturbation: None,
        }
    }
}

impl SolverConfig {
    /// Creates a stiffer config (more passes, full correction per visit).
    pub fn stiff() -> Self {
        Self {
            relaxation_passes: 15,
            stiffness: 1.0,
            ..Default::default()
        }
    }

    /// Creates a loose config (few passes, visibly elastic).
    pub fn loose() -> Self {
        Self {
            relaxation_passes: 2,
            ..Default::default()
        }
    }

    /// Cloth that starts gathered and unravels: sticks grow by one unit per
    /// step up to 10, and a random point is kicked every 5M updates.
    pub fn unravel() -> Self {
        Self {
            growth: Some(RestLengthGrowth {
                rate: 1.0,
                cap: constants::DEFAULT_SPACING,
            }),
            perturbation: Some(Perturbation::default()),
            relaxation_passes: 1,
            stiffness: 1.0,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_floor(mut self, floor: Option<f32>) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_relaxation(mut self, relaxation: RelaxationKind) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Per-step position delta contributed by gravity.
    pub fn gravity_delta(&self) -> [f32; 2] {
        let dt2 = self.time_step * self.time_step;
        [self.gravity[0] * dt2, self.gravity[1] * dt2]
    }

    /// Validates every parameter. Called by `Simulation::new`.
    pub fn validate(&self) -> WeaveResult<()> {
        if !(self.gravity[0].is_finite() && self.gravity[1].is_finite()) {
            return Err(WeaveError::InvalidConfig("gravity must be finite".into()));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(WeaveError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.relaxation_passes == 0 {
            return Err(WeaveError::InvalidConfig("relaxation_passes must be >= 1".into()));
        }
        if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
            return Err(WeaveError::InvalidConfig(format!(
                "stiffness must be in (0, 1], got {}",
                self.stiffness
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WeaveError::InvalidConfig(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if let Some(floor) = self.floor {
            if !floor.is_finite() {
                return Err(WeaveError::InvalidConfig("floor must be finite".into()));
            }
        }
        if let Some(growth) = self.growth {
            if !(growth.rate.is_finite() && growth.rate >= 0.0) {
                return Err(WeaveError::InvalidConfig(format!(
                    "growth rate must be non-negative, got {}",
                    growth.rate
                )));
            }
            if !(growth.cap.is_finite() && growth.cap > 0.0) {
                return Err(WeaveError::InvalidConfig(format!(
                    "growth cap must be positive, got {}",
                    growth.cap
                )));
            }
        }
        if let Some(p) = self.perturbation {
            if p.interval == 0 {
                return Err(WeaveError::InvalidConfig("perturbation interval must be >= 1".into()));
            }
            if !(p.magnitude.is_finite() && p.magnitude >= 0.0) {
                return Err(WeaveError::InvalidConfig(format!(
                    "perturbation magnitude must be non-negative, got {}",
                    p.magnitude
                )));
            }
        }
        Ok(())
    }
}
