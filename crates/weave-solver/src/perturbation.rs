//! Random disturbance of a single free point.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use weave_math::Vec2;
use weave_mesh::Point;
use weave_types::PointId;

/// Moves one uniformly chosen free point by `magnitude` in a uniformly
/// random direction.
///
/// Only `position` changes, so the kick also shows up as velocity on the
/// next integration. Returns `None` (and draws nothing) when every point
/// is pinned.
pub fn disturb(
    points: &mut [Point],
    rng: &mut ChaCha8Rng,
    magnitude: f32,
) -> Option<(PointId, Vec2)> {
    let free = points.iter().filter(|p| !p.pinned).count();
    if free == 0 {
        return None;
    }

    let nth = rng.gen_range(0..free);
    let (index, point) = points
        .iter_mut()
        .enumerate()
        .filter(|(_, p)| !p.pinned)
        .nth(nth)?;

    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let displacement = Vec2::new(angle.cos(), angle.sin()) * magnitude;
    point.position += displacement;

    Some((PointId(index as u32), displacement))
}
