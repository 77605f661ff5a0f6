//! Vector helpers shared across the engine.

use glam::Vec2;

/// Vector from `a` to `b` and its Euclidean length.
///
/// The relaxation solver needs both, and the length is reused as the
/// divisor of the correction fraction, so they are computed together.
#[inline]
pub fn separation(a: Vec2, b: Vec2) -> (Vec2, f32) {
    let delta = b - a;
    (delta, delta.length())
}

/// Converts a `[x, y]` array (config/serialization form) into a `Vec2`.
#[inline]
pub fn from_array(v: [f32; 2]) -> Vec2 {
    Vec2::new(v[0], v[1])
}

/// Converts a `Vec2` into its `[x, y]` array form.
#[inline]
pub fn to_array(v: Vec2) -> [f32; 2] {
    [v.x, v.y]
}
