//! CLI command implementations.

use weave_bench::metrics::BenchmarkMetrics;
use weave_bench::runner::BenchmarkRunner;
use weave_bench::scenarios::{Scenario, ScenarioKind};
use weave_debug::{StateSnapshot, TelemetryHook};
use weave_io::{validate_input, SimulationInput, SimulationMetrics, SimulationOutput};
use weave_mesh::build_grid;
use weave_render::{JsonFrameExporter, RenderFrame, Renderer};
use weave_solver::RelaxationKind;
use weave_telemetry::{EventBus, EventKind, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run a simulation from an input file.
pub fn simulate(
    config_path: &str,
    steps: Option<u64>,
    output_path: Option<&str>,
    snapshot_path: Option<&str>,
) -> CommandResult {
    let mut input = SimulationInput::load(config_path)?;
    if let Some(steps) = steps {
        input.steps = steps;
    }
    validate_input(&input)?;

    let mut sim = input.build()?;

    println!("Weave Simulation");
    println!("────────────────");
    println!("Config:   {config_path}");
    println!(
        "Cloth:    {}x{} ({} points, {} sticks)",
        input.grid.rows,
        input.grid.cols,
        sim.points().len(),
        sim.sticks().len()
    );
    println!("Strategy: {}", sim.strategy_name());
    println!("Steps:    {}", input.steps);
    println!();

    let mut exporter = output_path.map(JsonFrameExporter::new);
    if let Some(exporter) = exporter.as_mut() {
        exporter.init(sim.mesh())?;
        exporter.submit_frame(&RenderFrame::capture(&sim))?;
    }

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    let mut hook = TelemetryHook::new();

    let mut metrics = SimulationMetrics::default();
    let start = std::time::Instant::now();

    for _ in 0..input.steps {
        let result = sim.step_observed(&mut hook);
        metrics.floor_contacts += u64::from(result.floor_contacts);
        metrics.final_residual = result.max_residual;
        if result.perturbed.is_some() {
            metrics.perturbations += 1;
        }

        if result.step % input.frame_every == 0 {
            hook.record(
                result.step,
                EventKind::Energy {
                    kinetic: sim.kinetic_energy(),
                    max_strain: sim.max_strain(),
                },
            );
            if let Some(exporter) = exporter.as_mut() {
                exporter.submit_frame(&RenderFrame::capture(&sim))?;
            }
        }

        bus.emit_all(hook.drain_events());
        bus.flush();
    }
    let tally = bus.finish();
    tracing::debug!(
        events = tally.total,
        contact_steps = tally.contact_steps,
        perturbations = tally.perturbations,
        "telemetry finished"
    );

    metrics.wall_time_seconds = start.elapsed().as_secs_f64();
    metrics.step_count = sim.step_count();
    metrics.final_kinetic_energy = sim.kinetic_energy();
    metrics.max_strain = sim.max_strain();
    let output = SimulationOutput::from_simulation(&sim, metrics);

    println!("  Wall time:     {:.3}s", output.metrics.wall_time_seconds);
    println!("  Final KE:      {:.6e}", output.metrics.final_kinetic_energy);
    println!("  Max strain:    {:.4}", output.metrics.max_strain);
    println!("  Residual:      {:.6}", output.metrics.final_residual);
    println!("  Floor clamps:  {}", output.metrics.floor_contacts);
    println!("  Disturbances:  {}", output.metrics.perturbations);

    if let Some(mut exporter) = exporter {
        exporter.finalize()?;
        println!(
            "Frames written to: {} ({} frames)",
            exporter.output_path().display(),
            exporter.frame_count()
        );
    }

    if let Some(path) = snapshot_path {
        let bytes = StateSnapshot::capture(&sim).to_bytes()?;
        std::fs::write(path, bytes)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>, colored: bool) -> CommandResult {
    println!("Weave Benchmark Suite");
    println!("═════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![ScenarioKind::from_name(scenario_name)?]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if colored {
            scenario = scenario.with_relaxation(RelaxationKind::Colored);
        }

        println!(
            "Running: {} ({}x{} grid, {} steps)",
            kind.name(),
            scenario.grid.rows,
            scenario.grid.cols,
            scenario.steps,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Strategy:      {}", metrics.strategy);
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max strain:    {:.4}", metrics.max_strain);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> CommandResult {
    println!("Weave Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot = StateSnapshot::from_bytes(&data)?;

    let pinned = snapshot.pinned.iter().filter(|&&p| p).count();
    println!("Step:         {}", snapshot.step);
    println!("Grid:         {}x{}", snapshot.rows, snapshot.cols);
    println!("Points:       {} ({} pinned)", snapshot.point_count(), pinned);

    let ys = || snapshot.positions.iter().skip(1).step_by(2).copied();
    if snapshot.point_count() > 0 {
        let min_y = ys().fold(f32::INFINITY, f32::min);
        let max_y = ys().fold(f32::NEG_INFINITY, f32::max);
        println!("Y range:      [{:.4}, {:.4}]", min_y, max_y);

        let max_speed = snapshot
            .positions
            .chunks_exact(2)
            .zip(snapshot.previous_positions.chunks_exact(2))
            .map(|(p, q)| ((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt())
            .fold(0.0f32, f32::max);
        println!("Max velocity: {:.6}", max_speed);
    }

    Ok(())
}

/// Validate a simulation input.
pub fn validate(path: &str) -> CommandResult {
    println!("Weave Validator");
    println!("───────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("unsupported file format: {path} (expected .toml)").into());
    }

    let input = SimulationInput::load(path)?;
    validate_input(&input)?;
    let mesh = build_grid(&input.grid)?;
    let counts = mesh.count_by_kind();

    println!("✅ Input is valid.");
    println!(
        "   {} points ({} pinned), {} sticks ({} structural, {} shear, {} bend), {} steps",
        mesh.point_count(),
        mesh.pinned_count(),
        counts.total(),
        counts.structural,
        counts.shear,
        counts.bend,
        input.steps
    );

    Ok(())
}
