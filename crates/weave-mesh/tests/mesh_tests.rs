//! Integration tests for weave-mesh.

use weave_math::Vec2;
use weave_mesh::{build_grid, ClothMesh, Density, GridSpec, Placement, Point, Stick, StickKind};
use weave_types::{PointId, WeaveError};

// ─── Builder Error Tests ──────────────────────────────────────

fn assert_invalid_topology(spec: GridSpec) {
    match build_grid(&spec) {
        Err(WeaveError::InvalidTopology(_)) => {}
        other => panic!("expected InvalidTopology, got {:?}", other.map(|m| m.point_count())),
    }
}

#[test]
fn single_row_is_rejected() {
    assert_invalid_topology(GridSpec::new(1, 5, 10.0));
}

#[test]
fn single_column_is_rejected() {
    assert_invalid_topology(GridSpec::new(5, 1, 10.0));
}

#[test]
fn empty_grid_is_rejected() {
    assert_invalid_topology(GridSpec::new(0, 0, 10.0));
}

#[test]
fn non_positive_spacing_is_rejected() {
    assert_invalid_topology(GridSpec::new(3, 3, 0.0));
    assert_invalid_topology(GridSpec::new(3, 3, -1.0));
    assert_invalid_topology(GridSpec::new(3, 3, f32::NAN));
}

#[test]
fn gathered_rich_grid_is_rejected() {
    assert_invalid_topology(
        GridSpec::new(5, 4, 10.0)
            .with_density(Density::Rich)
            .with_placement(Placement::Gathered),
    );
    let minimal = GridSpec::new(5, 4, 10.0)
        .with_density(Density::Minimal)
        .with_placement(Placement::Gathered);
    assert!(build_grid(&minimal).is_ok());
}

// ─── Stick Count Tests ────────────────────────────────────────

#[test]
fn minimal_3x3_has_12_sticks() {
    let mesh = build_grid(&GridSpec::new(3, 3, 10.0).with_density(Density::Minimal)).unwrap();
    assert_eq!(mesh.point_count(), 9);
    assert_eq!(mesh.stick_count(), 12);
    assert_eq!(mesh.stick_count(), 2 * 3 * 3 - 3 - 3);
    let counts = mesh.count_by_kind();
    assert_eq!(counts.shear, 0);
    assert_eq!(counts.bend, 0);
}

#[test]
fn rich_3x3_adds_shear_and_bend() {
    let mesh = build_grid(&GridSpec::new(3, 3, 10.0).with_density(Density::Rich)).unwrap();
    let counts = mesh.count_by_kind();
    assert_eq!(counts.structural, 12);
    assert_eq!(counts.shear, 2 * 2 * 2); // both diagonals of 4 cells
    assert_eq!(counts.bend, 3 + 3); // one two-hop link per row and per column
    assert_eq!(mesh.stick_count(), 26);
}

#[test]
fn rich_rectangular_counts_match_formula() {
    // 4 cols x 3 rows, same layout as a 4-wide cloth
    let (rows, cols) = (3, 4);
    let mesh = build_grid(&GridSpec::new(rows, cols, 1.0)).unwrap();
    let counts = mesh.count_by_kind();
    assert_eq!(counts.structural, 9 + 8);
    assert_eq!(counts.shear, 12);
    assert_eq!(counts.bend, 6 + 4);
    assert_eq!(counts.total(), 39);
    assert_eq!(mesh.stick_count(), Density::Rich.expected_stick_count(rows, cols));
}

#[test]
fn two_by_two_rich_has_no_bend() {
    let mesh = build_grid(&GridSpec::new(2, 2, 1.0)).unwrap();
    assert_eq!(mesh.count_by_kind().bend, 0);
    assert_eq!(mesh.stick_count(), 4 + 2);
}

// ─── Layout Tests ─────────────────────────────────────────────

#[test]
fn top_row_is_pinned_and_rest_is_free() {
    let mesh = build_grid(&GridSpec::new(4, 5, 10.0)).unwrap();
    assert_eq!(mesh.pinned_count(), 5);
    for col in 0..5 {
        assert!(mesh.point_at(0, col).pinned);
    }
    for row in 1..4 {
        for col in 0..5 {
            assert!(!mesh.point_at(row, col).pinned);
        }
    }
}

#[test]
fn points_start_at_rest() {
    let mesh = build_grid(&GridSpec::new(3, 3, 10.0)).unwrap();
    assert!(mesh.points().iter().all(|p| p.velocity() == Vec2::ZERO));
}

#[test]
fn indexing_is_row_major() {
    let mesh = build_grid(&GridSpec::new(3, 4, 2.0).with_origin([10.0, 20.0])).unwrap();
    assert_eq!(mesh.index(1, 2), PointId(6));
    assert_eq!(mesh.point_at(1, 2).position, Vec2::new(14.0, 22.0));
    assert_eq!(mesh.point_at(2, 3).position, Vec2::new(16.0, 24.0));
}

#[test]
fn emission_order_is_deterministic() {
    let mesh = build_grid(&GridSpec::new(3, 3, 1.0)).unwrap();
    let first: Vec<(u32, u32, StickKind)> = mesh
        .sticks()
        .iter()
        .take(6)
        .map(|s| (s.a.0, s.b.0, s.kind))
        .collect();
    assert_eq!(
        first,
        vec![
            (0, 1, StickKind::Structural),
            (0, 3, StickKind::Structural),
            (0, 4, StickKind::Shear),
            (3, 1, StickKind::Shear),
            (0, 2, StickKind::Bend),
            (0, 6, StickKind::Bend),
        ]
    );

    let again = build_grid(&GridSpec::new(3, 3, 1.0)).unwrap();
    assert_eq!(mesh.sticks(), again.sticks());
}

#[test]
fn no_stick_leaves_the_grid_or_wraps() {
    let mesh = build_grid(&GridSpec::new(4, 3, 1.0)).unwrap();
    for s in mesh.sticks() {
        assert_ne!(s.a, s.b);
        let (ra, ca) = (s.a.index() / 3, s.a.index() % 3);
        let (rb, cb) = (s.b.index() / 3, s.b.index() % 3);
        assert!(ra.abs_diff(rb) <= 2 && ca.abs_diff(cb) <= 2);
    }
}

#[test]
fn rest_lengths_follow_initial_positions() {
    let spacing = 10.0;
    let mesh = build_grid(&GridSpec::new(3, 3, spacing)).unwrap();
    for s in mesh.sticks() {
        let expected = match s.kind {
            StickKind::Structural => spacing,
            StickKind::Shear => spacing * std::f32::consts::SQRT_2,
            StickKind::Bend => 2.0 * spacing,
        };
        assert!((s.rest_length - expected).abs() < 1e-4, "{:?}", s);
        assert!((s.current_length(mesh.points()) - s.rest_length).abs() < 1e-4);
    }
}

#[test]
fn gathered_placement_collapses_rows() {
    let mesh = build_grid(
        &GridSpec::new(3, 3, 10.0)
            .with_density(Density::Minimal)
            .with_placement(Placement::Gathered),
    )
    .unwrap();
    for row in 0..3 {
        assert_eq!(mesh.point_at(row, 2).position, Vec2::new(20.0, 0.0));
    }
    let vertical_zero = mesh
        .sticks()
        .iter()
        .filter(|s| s.rest_length == 0.0)
        .count();
    assert_eq!(vertical_zero, 6);
}

#[test]
fn segments_follow_sticks() {
    let mesh = build_grid(&GridSpec::new(2, 2, 1.0).with_density(Density::Minimal)).unwrap();
    let segments: Vec<_> = mesh.segments().collect();
    assert_eq!(segments.len(), mesh.stick_count());
    assert_eq!(segments[0], (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)));
}

// ─── from_parts Validation Tests ──────────────────────────────

fn pair() -> Vec<Point> {
    vec![Point::new(Vec2::ZERO), Point::new(Vec2::new(3.0, 4.0))]
}

#[test]
fn from_parts_accepts_valid_layout() {
    let points = pair();
    let stick = Stick::between(PointId(0), PointId(1), &points, StickKind::Structural);
    let mesh = ClothMesh::from_parts(points, vec![stick], 1, 2).unwrap();
    assert!((mesh.sticks()[0].rest_length - 5.0).abs() < 1e-6);
}

#[test]
fn from_parts_rejects_self_loop() {
    let stick = Stick::new(PointId(1), PointId(1), 1.0, StickKind::Structural);
    assert!(ClothMesh::from_parts(pair(), vec![stick], 1, 2).is_err());
}

#[test]
fn from_parts_rejects_out_of_range() {
    let stick = Stick::new(PointId(0), PointId(9), 1.0, StickKind::Structural);
    assert!(ClothMesh::from_parts(pair(), vec![stick], 1, 2).is_err());
}

#[test]
fn from_parts_rejects_shape_mismatch() {
    assert!(ClothMesh::from_parts(pair(), Vec::new(), 2, 2).is_err());
}

#[test]
fn from_parts_rejects_negative_rest_length() {
    let stick = Stick::new(PointId(0), PointId(1), -1.0, StickKind::Structural);
    assert!(ClothMesh::from_parts(pair(), vec![stick], 1, 2).is_err());
}

// ─── Serialization Tests ──────────────────────────────────────

#[test]
fn grid_spec_from_toml() {
    let spec: GridSpec = toml::from_str(
        r#"
        rows = 4
        cols = 6
        spacing = 12.5
        density = "minimal"
        placement = "gathered"
        "#,
    )
    .unwrap();
    assert_eq!(spec.rows, 4);
    assert_eq!(spec.density, Density::Minimal);
    assert_eq!(spec.placement, Placement::Gathered);
    assert_eq!(spec.origin, [0.0, 0.0]);
}

#[test]
fn mesh_serialization() {
    let mesh = build_grid(&GridSpec::new(2, 3, 1.0)).unwrap();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: ClothMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.points(), mesh.points());
    assert_eq!(recovered.sticks(), mesh.sticks());
}
