//! Integration tests for weave-render.

use weave_math::Vec2;
use weave_mesh::{build_grid, Density, GridSpec};
use weave_render::{HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer};
use weave_solver::{Simulation, SolverConfig};

#[test]
fn headless_init() {
    let mesh = build_grid(&GridSpec::new(2, 2, 1.0)).unwrap();
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
}

#[test]
fn headless_submit_frames() {
    let mut sim =
        Simulation::from_spec(&GridSpec::new(3, 3, 1.0), SolverConfig::default()).unwrap();
    let mut renderer = HeadlessRenderer::new();
    renderer.init(sim.mesh()).unwrap();

    for _ in 0..3 {
        sim.step();
        renderer.submit_frame(&RenderFrame::capture(&sim)).unwrap();
    }
    renderer.finalize().unwrap();
    assert_eq!(renderer.frame_count(), 3);
}

#[test]
fn render_frame_capture() {
    let mut sim =
        Simulation::from_spec(&GridSpec::new(2, 3, 5.0), SolverConfig::default()).unwrap();
    sim.run(4);
    let frame = RenderFrame::capture(&sim);
    assert_eq!(frame.step, 4);
    assert_eq!(frame.positions.len(), 6);
    assert_eq!(frame.positions[0], Vec2::ZERO);
}

#[test]
fn json_export_writes_topology_and_frames() {
    let path = std::env::temp_dir().join(format!("weave_render_{}.json", std::process::id()));
    let spec = GridSpec::new(3, 3, 10.0).with_density(Density::Minimal);
    let mut sim = Simulation::from_spec(&spec, SolverConfig::default()).unwrap();

    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(sim.mesh()).unwrap();
    exporter.submit_frame(&RenderFrame::capture(&sim)).unwrap();
    for _ in 0..5 {
        sim.step();
        exporter.submit_frame(&RenderFrame::capture(&sim)).unwrap();
    }
    assert_eq!(exporter.frame_count(), 6);
    exporter.finalize().unwrap();

    let data = JsonFrameExporter::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(data.point_count, 9);
    assert_eq!(data.sticks.len(), 12);
    assert_eq!(data.sticks[0], [0, 1]);
    assert_eq!(data.pinned.iter().filter(|&&p| p).count(), 3);
    assert_eq!(data.frames.len(), 6);
    assert_eq!(data.frames[5].step, 5);
    assert_eq!(data.frames[0].positions.len(), 18);
    assert_eq!(data.frames[0].positions[2..4], [10.0, 0.0]);

    let bounds = data.bounds.unwrap();
    assert!(bounds.contains(Vec2::ZERO));
    assert!(bounds.max.y >= 20.0);
}

#[test]
fn json_export_rejects_mismatched_frame() {
    let mesh = build_grid(&GridSpec::new(2, 2, 1.0)).unwrap();
    let mut exporter = JsonFrameExporter::new(std::env::temp_dir().join("weave_unused.json"));
    exporter.init(&mesh).unwrap();
    let frame = RenderFrame::new(0, vec![Vec2::ZERO; 3]);
    assert!(exporter.submit_frame(&frame).is_err());
    assert_eq!(exporter.frame_count(), 0);
}
