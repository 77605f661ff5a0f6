//! Integration tests for weave-io.

use weave_io::contract::{SimulationInput, SimulationMetrics, SimulationOutput};
use weave_io::validator::validate_input;
use weave_mesh::{Density, GridSpec, Placement};
use weave_solver::{RelaxationKind, SolverConfig};
use weave_types::WeaveError;

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_input() {
    let input = SimulationInput::default();
    assert_eq!(input.steps, 1000);
    assert_eq!(input.grid.rows, 10);
    assert_eq!(input.solver.relaxation_passes, 5);
    assert!(validate_input(&input).is_ok());
}

#[test]
fn input_from_toml() {
    let input = SimulationInput::from_toml_str(
        r#"
        steps = 250

        [grid]
        rows = 4
        cols = 6
        spacing = 12.0
        origin = [50.0, 20.0]
        density = "minimal"

        [solver]
        relaxation_passes = 8
        floor = 200.0
        relaxation = "colored"

        [solver.growth]
        rate = 0.5
        cap = 12.0
        "#,
    )
    .unwrap();

    assert_eq!(input.steps, 250);
    assert_eq!(input.frame_every, 1);
    assert_eq!(input.grid.density, Density::Minimal);
    assert_eq!(input.grid.origin, [50.0, 20.0]);
    assert_eq!(input.solver.floor, Some(200.0));
    assert_eq!(input.solver.relaxation, RelaxationKind::Colored);
    assert_eq!(input.solver.growth.map(|g| g.cap), Some(12.0));
    assert!(validate_input(&input).is_ok());

    let sim = input.build().unwrap();
    assert_eq!(sim.points().len(), 24);
    assert_eq!(sim.strategy_name(), "colored");
}

#[test]
fn malformed_toml_is_a_serialization_error() {
    match SimulationInput::from_toml_str("steps = \"many\"") {
        Err(WeaveError::Serialization(_)) => {}
        other => panic!("expected Serialization error, got {:?}", other),
    }
}

#[test]
fn input_toml_round_trip() {
    let input = SimulationInput {
        steps: 42,
        frame_every: 3,
        grid: GridSpec::new(5, 7, 8.0).with_origin([10.0, 10.0]),
        solver: SolverConfig::unravel().with_seed(11),
    };
    let text = input.to_toml_string().unwrap();
    let recovered = SimulationInput::from_toml_str(&text).unwrap();
    assert_eq!(recovered.steps, 42);
    assert_eq!(recovered.grid.cols, 7);
    assert_eq!(recovered.solver, input.solver);
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("weave_io_{}.toml", std::process::id()));
    std::fs::write(&path, "steps = 3\n[grid]\nrows = 2\ncols = 2\nspacing = 1.0\n").unwrap();
    let input = SimulationInput::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(input.steps, 3);
    assert_eq!(input.grid.rows, 2);
}

#[test]
fn missing_file_is_io_error() {
    match SimulationInput::load("/nonexistent/weave/input.toml") {
        Err(WeaveError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn output_json_round_trip() {
    let mut sim = SimulationInput::default().build().unwrap();
    sim.run(3);
    let output = SimulationOutput::from_simulation(
        &sim,
        SimulationMetrics {
            step_count: 3,
            ..Default::default()
        },
    );
    assert_eq!(output.positions.len(), 100);
    let json = serde_json::to_string(&output).unwrap();
    let recovered: SimulationOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.metrics, output.metrics);
    assert_eq!(recovered.positions, output.positions);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn single_row_grid_rejected() {
    let input = SimulationInput {
        grid: GridSpec::new(1, 5, 10.0),
        ..Default::default()
    };
    match validate_input(&input) {
        Err(WeaveError::InvalidTopology(msg)) => assert!(msg.starts_with("[grid]")),
        other => panic!("expected InvalidTopology, got {:?}", other),
    }
}

#[test]
fn gathered_rich_grid_rejected() {
    let input = SimulationInput::from_toml_str(
        r#"
        [grid]
        rows = 5
        cols = 4
        spacing = 10.0
        placement = "gathered"
        "#,
    )
    .unwrap();
    assert_eq!(input.grid.placement, Placement::Gathered);
    match validate_input(&input) {
        Err(WeaveError::InvalidTopology(msg)) => assert!(msg.contains("minimal density")),
        other => panic!("expected InvalidTopology, got {:?}", other),
    }
}

#[test]
fn zero_passes_rejected() {
    let mut input = SimulationInput::default();
    input.solver.relaxation_passes = 0;
    match validate_input(&input) {
        Err(WeaveError::InvalidConfig(msg)) => assert!(msg.starts_with("[solver]")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn zero_steps_rejected() {
    let input = SimulationInput {
        steps: 0,
        ..Default::default()
    };
    assert!(validate_input(&input).is_err());
}

#[test]
fn floor_above_pinned_row_rejected() {
    let mut input = SimulationInput {
        grid: GridSpec::new(3, 3, 10.0).with_origin([0.0, 100.0]),
        ..Default::default()
    };
    input.solver.floor = Some(50.0);
    assert!(validate_input(&input).is_err());

    input.solver.floor = None;
    assert!(validate_input(&input).is_ok());
}
