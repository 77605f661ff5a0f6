//! Integration tests for weave-math.

use weave_math::{from_array, separation, to_array, Bounds2, Vec2};

// ─── Vector Helper Tests ──────────────────────────────────────

#[test]
fn separation_points_from_a_to_b() {
    let (delta, len) = separation(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
    assert_eq!(delta, Vec2::new(3.0, 4.0));
    assert!((len - 5.0).abs() < 1e-6);
}

#[test]
fn separation_of_coincident_points_is_zero() {
    let p = Vec2::new(2.5, -1.0);
    let (delta, len) = separation(p, p);
    assert_eq!(delta, Vec2::ZERO);
    assert_eq!(len, 0.0);
}

#[test]
fn array_conversion() {
    let v = from_array([0.0, 0.5]);
    assert_eq!(v, Vec2::new(0.0, 0.5));
    assert_eq!(to_array(v), [0.0, 0.5]);
}

// ─── Bounds Tests ─────────────────────────────────────────────

#[test]
fn bounds_of_points() {
    let b = Bounds2::from_points([
        Vec2::new(0.0, 3.0),
        Vec2::new(-2.0, 1.0),
        Vec2::new(5.0, -4.0),
    ])
    .unwrap();
    assert_eq!(b.min, Vec2::new(-2.0, -4.0));
    assert_eq!(b.max, Vec2::new(5.0, 3.0));
    assert_eq!(b.extent(), Vec2::new(7.0, 7.0));
}

#[test]
fn bounds_of_empty_set() {
    assert!(Bounds2::from_points(std::iter::empty()).is_none());
}

#[test]
fn bounds_contains_boundary() {
    let b = Bounds2::from_points([Vec2::ZERO, Vec2::ONE]).unwrap();
    assert!(b.contains(Vec2::new(1.0, 0.0)));
    assert!(!b.contains(Vec2::new(1.0, 1.5)));
}

#[test]
fn bounds_serialization() {
    let b = Bounds2::from_points([Vec2::ZERO, Vec2::new(2.0, 3.0)]).unwrap();
    let json = serde_json::to_string(&b).unwrap();
    let recovered: Bounds2 = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, b);
}

#[test]
fn bounds_union_covers_both() {
    let a = Bounds2::from_points([Vec2::ZERO, Vec2::ONE]).unwrap();
    let b = Bounds2::from_points([Vec2::new(-1.0, 0.5), Vec2::new(0.5, 4.0)]).unwrap();
    let u = a.union(b);
    assert_eq!(u.min, Vec2::new(-1.0, 0.0));
    assert_eq!(u.max, Vec2::new(1.0, 4.0));
}
