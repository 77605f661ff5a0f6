//! Benchmark scenarios: grid, config and run length for each test case.
//!
//! 1. **Hanging cloth**: 10×10 rich grid pinned at the top, settling
//!    under gravity in an 800×600 window
//! 2. **Unravel**: 50×50 cloth gathered onto its top row, growing its
//!    vertical sticks until it hangs
//! 3. **Floor drop**: a long sheet whose lower half piles onto the floor

use serde::{Deserialize, Serialize};
use weave_mesh::{Density, GridSpec, Placement};
use weave_solver::{RelaxationKind, SolverConfig};
use weave_types::{WeaveError, WeaveResult};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    HangingCloth,
    Unravel,
    FloorDrop,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingCloth,
            ScenarioKind::Unravel,
            ScenarioKind::FloorDrop,
        ]
    }

    /// Returns the name used on the command line and in CSV output.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::Unravel => "unravel",
            ScenarioKind::FloorDrop => "floor_drop",
        }
    }

    /// Looks a scenario up by name.
    pub fn from_name(name: &str) -> WeaveResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(|k| k.name()).collect();
                WeaveError::InvalidConfig(format!(
                    "unknown scenario '{}', expected one of: {}",
                    name,
                    known.join(", ")
                ))
            })
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub grid: GridSpec,
    pub config: SolverConfig,
    /// Number of steps to simulate.
    pub steps: u64,
}

impl Scenario {
    /// Ten by ten points spread across an 800 px wide window, top row
    /// pinned, floor at the window's bottom edge.
    pub fn hanging_cloth() -> Self {
        let spacing = (800 / 11) as f32;
        Self {
            kind: ScenarioKind::HangingCloth,
            grid: GridSpec::new(10, 10, spacing).with_origin([spacing / 2.0, spacing / 2.0]),
            config: SolverConfig::default(),
            steps: 600,
        }
    }

    /// A 50×50 cloth that starts folded onto its pinned row.
    pub fn unravel() -> Self {
        Self {
            kind: ScenarioKind::Unravel,
            grid: GridSpec::new(50, 50, 10.0)
                .with_origin([150.0, 0.0])
                .with_density(Density::Minimal)
                .with_placement(Placement::Gathered),
            config: SolverConfig::unravel(),
            steps: 300,
        }
    }

    /// A 20×40 sheet hanging 100 px above a floor it is longer than.
    pub fn floor_drop() -> Self {
        Self {
            kind: ScenarioKind::FloorDrop,
            grid: GridSpec::new(40, 20, 5.0).with_origin([300.0, 50.0]),
            config: SolverConfig::stiff().with_floor(Some(150.0)),
            steps: 400,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::Unravel => Self::unravel(),
            ScenarioKind::FloorDrop => Self::floor_drop(),
        }
    }

    /// Switch the relaxation strategy, e.g. to compare sequential and
    /// colored relaxation on the same scenario.
    pub fn with_relaxation(mut self, relaxation: RelaxationKind) -> Self {
        self.config.relaxation = relaxation;
        self
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }
}
