//! Benchmark runner: executes scenarios and collects metrics.

use std::time::Instant;

use weave_solver::Simulation;
use weave_types::WeaveResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> WeaveResult<BenchmarkMetrics> {
        let mut sim = Simulation::from_spec(&scenario.grid, scenario.config.clone())?;
        let initial = sim.positions();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.steps as usize);
        let mut residual_sum = 0.0_f64;

        let total_start = Instant::now();
        for _ in 0..scenario.steps {
            let result = sim.step();
            step_times.push(result.wall_time);
            residual_sum += f64::from(result.max_residual);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = initial
            .iter()
            .zip(sim.positions())
            .map(|(a, b)| a.distance(b))
            .fold(0.0f32, f32::max);

        let (avg_step, avg_residual) = if step_times.is_empty() {
            (0.0, 0.0)
        } else {
            let n = step_times.len() as f64;
            (step_times.iter().sum::<f64>() / n, (residual_sum / n) as f32)
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        tracing::info!(
            scenario = scenario.kind.name(),
            steps = scenario.steps,
            wall_time = total_wall_time,
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            strategy: sim.strategy_name().to_string(),
            point_count: sim.points().len(),
            stick_count: sim.sticks().len(),
            steps: scenario.steps,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            final_kinetic_energy: sim.kinetic_energy(),
            max_strain: sim.max_strain(),
            avg_residual,
            max_displacement,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> WeaveResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
