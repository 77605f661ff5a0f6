//! Integration tests for weave-bench.

use weave_bench::metrics::BenchmarkMetrics;
use weave_bench::runner::BenchmarkRunner;
use weave_bench::scenarios::{Scenario, ScenarioKind};
use weave_mesh::{build_grid, Placement};
use weave_solver::RelaxationKind;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn hanging_cloth_setup() {
    let s = Scenario::hanging_cloth();
    assert_eq!(s.kind, ScenarioKind::HangingCloth);
    assert_eq!(s.grid.spacing, 72.0);
    assert_eq!(s.grid.origin, [36.0, 36.0]);
    let mesh = build_grid(&s.grid).unwrap();
    assert_eq!(mesh.point_count(), 100);
    assert_eq!(mesh.pinned_count(), 10);
}

#[test]
fn unravel_setup() {
    let s = Scenario::unravel();
    assert_eq!(s.grid.placement, Placement::Gathered);
    assert!(s.config.growth.is_some());
    assert!(s.config.perturbation.is_some());
    let mesh = build_grid(&s.grid).unwrap();
    assert_eq!(mesh.stick_count(), 2 * 50 * 49);
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()).unwrap(), kind);
        assert!(Scenario::from_kind(kind).config.validate().is_ok());
    }
    assert!(ScenarioKind::from_name("sphere_drape").is_err());
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_hanging_cloth() {
    let scenario = Scenario::hanging_cloth().with_steps(5);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "hanging_cloth");
    assert_eq!(metrics.strategy, "gauss_seidel");
    assert_eq!(metrics.steps, 5);
    assert_eq!(metrics.point_count, 100);
    assert!(metrics.total_wall_time >= 0.0);
    assert!(metrics.max_displacement > 0.0); // lower rows start below the floor
}

#[test]
fn run_all_scenarios_short() {
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind).with_steps(3);
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.final_kinetic_energy.is_finite());
        assert!(metrics.min_step_time <= metrics.max_step_time);
    }
}

#[test]
fn colored_variant_runs() {
    let scenario = Scenario::floor_drop()
        .with_relaxation(RelaxationKind::Colored)
        .with_steps(10);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert_eq!(metrics.strategy, "colored");
    assert!(metrics.max_strain.is_finite());
}

#[test]
fn zero_step_run_reports_zero_times() {
    let metrics = BenchmarkRunner::run(&Scenario::hanging_cloth().with_steps(0)).unwrap();
    assert_eq!(metrics.avg_step_time, 0.0);
    assert_eq!(metrics.min_step_time, 0.0);
    assert_eq!(metrics.max_displacement, 0.0);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample(name: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: name.into(),
        strategy: "gauss_seidel".into(),
        point_count: 100,
        stick_count: 342,
        steps: 600,
        total_wall_time: 1.5,
        avg_step_time: 0.0025,
        min_step_time: 0.001,
        max_step_time: 0.004,
        final_kinetic_energy: 1e-5,
        max_strain: 0.01,
        avg_residual: 0.2,
        max_displacement: 80.0,
    }
}

#[test]
fn metrics_csv_output() {
    let row = sample("test").to_csv_row();
    assert!(row.starts_with("test,gauss_seidel,100,342,600,"));
    assert_eq!(
        row.split(',').count(),
        BenchmarkMetrics::to_csv_header().split(',').count()
    );
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample("a"), sample("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3); // Header + 2 data rows
    assert!(lines[0].starts_with("scenario"));
}

#[test]
fn metrics_json_round_trip() {
    let json = serde_json::to_string(&sample("json")).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.steps, 600);
    assert_eq!(recovered.scenario, "json");
}
