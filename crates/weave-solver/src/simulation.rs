//! The stepper: owns the cloth and advances it one fixed step at a time.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use weave_contact::Floor;
use weave_math::{from_array, Vec2};
use weave_mesh::{build_grid, ClothMesh, GridSpec, Point, Stick};
use weave_types::{PointId, WeaveResult};

use crate::colored::ColoredRelaxation;
use crate::config::{RelaxationKind, SolverConfig};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::perturbation::disturb;
use crate::relaxation::GaussSeidelRelaxation;
use crate::state::SimulationState;
use crate::strategy::SolverStrategy;

/// Summary of one completed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Index of the step just completed, starting at 1.
    pub step: u64,
    /// Free points integrated.
    pub integrated: u32,
    /// Relaxation passes performed.
    pub relaxation_passes: u32,
    /// Largest stick length error seen during the last pass.
    pub max_residual: f32,
    /// Points clamped by the floor (integration and final pass combined).
    pub floor_contacts: u32,
    /// Sticks whose rest length grew this step.
    pub grown_sticks: u32,
    /// Point moved by the disturbance rule, if it fired.
    pub perturbed: Option<PointId>,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// A running cloth simulation.
///
/// The config is validated and frozen at construction. Each [`step`]
/// performs, in order:
///
/// 1. Verlet integration of free points, clamped to the floor
/// 2. Rest-length growth (if configured)
/// 3. `relaxation_passes` passes of the relaxation strategy
/// 4. One disturbance, once enough integrations have accumulated
/// 5. A final floor pass, so no free point ends below the floor
///
/// Pinned points are never written, and with a fixed seed two simulations
/// built from the same inputs produce bit-identical positions.
///
/// [`step`]: Simulation::step
pub struct Simulation {
    state: SimulationState,
    config: SolverConfig,
    strategy: Box<dyn SolverStrategy>,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a simulation, picking the strategy named by `config.relaxation`.
    pub fn new(mesh: ClothMesh, config: SolverConfig) -> WeaveResult<Self> {
        let strategy: Box<dyn SolverStrategy> = match config.relaxation {
            RelaxationKind::GaussSeidel => Box::new(GaussSeidelRelaxation::new()),
            RelaxationKind::Colored => Box::new(ColoredRelaxation::new()),
        };
        Self::with_strategy(mesh, config, strategy)
    }

    /// Creates a simulation with an explicit relaxation strategy.
    pub fn with_strategy(
        mesh: ClothMesh,
        config: SolverConfig,
        mut strategy: Box<dyn SolverStrategy>,
    ) -> WeaveResult<Self> {
        config.validate()?;
        mesh.validate()?;
        strategy.prepare(&mesh);

        tracing::debug!(
            points = mesh.point_count(),
            sticks = mesh.stick_count(),
            strategy = strategy.name(),
            passes = config.relaxation_passes,
            seed = config.seed,
            "simulation created"
        );

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            state: SimulationState::new(mesh),
            config,
            strategy,
            rng,
        })
    }

    /// Builds the grid and wraps it in a simulation.
    pub fn from_spec(spec: &GridSpec, config: SolverConfig) -> WeaveResult<Self> {
        Self::new(build_grid(spec)?, config)
    }

    /// Advances one step.
    pub fn step(&mut self) -> StepResult {
        self.step_observed(&mut NoOpStepObserver)
    }

    /// Advances one step, reporting each phase to `observer`.
    pub fn step_observed(&mut self, observer: &mut dyn StepObserver) -> StepResult {
        let start = Instant::now();
        let step = self.state.step + 1;
        let floor = self.config.floor.map(Floor::new);
        observer.on_step_begin(step);

        // 1. Integrate
        let gravity = from_array(self.config.gravity_delta());
        let (integrated, mut contacts) = self.state.integrate(gravity, self.config.damping, floor);
        observer.on_integrate(step, integrated, &contacts);

        // 2. Grow
        let grown = match &self.config.growth {
            Some(growth) => self.state.grow_rest_lengths(growth),
            None => 0,
        };

        // 3. Relax
        let mut max_residual = 0.0;
        {
            let (points, sticks) = self.state.mesh.split_mut();
            let sticks: &[Stick] = sticks;
            for pass in 0..self.config.relaxation_passes {
                max_residual = self
                    .strategy
                    .relax_pass(points, sticks, self.config.stiffness);
                observer.on_relaxation_pass(step, pass, max_residual);
            }
        }

        // 4. Disturb
        let mut perturbed = None;
        if let Some(rule) = self.config.perturbation {
            if self.state.integration_updates >= rule.interval {
                self.state.integration_updates = 0;
                if let Some((id, displacement)) =
                    disturb(self.state.mesh.points_mut(), &mut self.rng, rule.magnitude)
                {
                    tracing::debug!(
                        step,
                        point = id.0,
                        dx = displacement.x,
                        dy = displacement.y,
                        "perturbed point"
                    );
                    observer.on_perturbation(step, id, displacement);
                    perturbed = Some(id);
                }
            }
        }

        // 5. Floor
        if let Some(floor) = floor {
            contacts = contacts.merge(floor.resolve(self.state.mesh.points_mut()));
        }

        self.state.step = step;

        let result = StepResult {
            step,
            integrated,
            relaxation_passes: self.config.relaxation_passes,
            max_residual,
            floor_contacts: contacts.resolved_count,
            grown_sticks: grown as u32,
            perturbed,
            wall_time: start.elapsed().as_secs_f64(),
        };

        tracing::trace!(
            step,
            max_residual,
            floor_contacts = result.floor_contacts,
            "step complete"
        );
        observer.on_step_complete(&result);
        result
    }

    /// Runs `steps` steps and returns the last result, if any.
    pub fn run(&mut self, steps: u64) -> Option<StepResult> {
        let mut last = None;
        for _ in 0..steps {
            last = Some(self.step());
        }
        last
    }

    /// Runs `steps` steps with an observer attached.
    pub fn run_observed(
        &mut self,
        steps: u64,
        observer: &mut dyn StepObserver,
    ) -> Option<StepResult> {
        let mut last = None;
        for _ in 0..steps {
            last = Some(self.step_observed(observer));
        }
        last
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn mesh(&self) -> &ClothMesh {
        &self.state.mesh
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Read-only point array, row-major.
    pub fn points(&self) -> &[Point] {
        self.state.mesh.points()
    }

    /// Read-only stick array, emission order.
    pub fn sticks(&self) -> &[Stick] {
        self.state.mesh.sticks()
    }

    /// Current positions, row-major.
    pub fn positions(&self) -> Vec<Vec2> {
        self.state.mesh.positions()
    }

    /// One segment per stick, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.state.mesh.segments()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Steps completed so far.
    pub fn step_count(&self) -> u64 {
        self.state.step
    }

    /// Free-point integrations since the last disturbance.
    pub fn integration_updates(&self) -> u64 {
        self.state.integration_updates
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Kinetic energy of the free points (unit mass).
    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy(self.config.time_step)
    }

    /// Largest relative stick stretch.
    pub fn max_strain(&self) -> f32 {
        self.state.max_strain()
    }
}
