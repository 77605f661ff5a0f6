//! Gauss–Seidel distance-constraint relaxation.
//!
//! Each stick is corrected in emission order and later sticks see the
//! corrections made by earlier ones in the same pass. The fixed pass budget
//! converges approximately, which is what gives the cloth its elasticity.

use weave_math::{separation, Vec2};
use weave_mesh::{ClothMesh, Point, Stick};
use weave_types::constants::EPSILON;

use crate::strategy::SolverStrategy;

/// Position offsets for the two endpoints of one stick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickCorrection {
    /// Offset to add to endpoint `a`.
    pub offset_a: Vec2,
    /// Offset to add to endpoint `b`.
    pub offset_b: Vec2,
    /// Absolute length error before correction.
    pub residual: f32,
}

/// Computes the correction for `stick` without applying it.
///
/// `f = (length - rest) / length`; the vector `stiffness * f * (b - a)` is
/// split between the endpoints by inverse mass, so a free pair shares it
/// equally and a free point tied to an anchor absorbs all of it.
/// Zero-length sticks and anchor–anchor sticks yield zero offsets.
#[inline]
pub fn stick_correction(points: &[Point], stick: &Stick, stiffness: f32) -> StickCorrection {
    let a = &points[stick.a.index()];
    let b = &points[stick.b.index()];

    let (delta, length) = separation(a.position, b.position);
    let error = length - stick.rest_length;
    let none = StickCorrection {
        offset_a: Vec2::ZERO,
        offset_b: Vec2::ZERO,
        residual: error.abs(),
    };

    if length <= EPSILON {
        return none;
    }

    let w_a = a.inv_mass();
    let w_b = b.inv_mass();
    let w_total = w_a + w_b;
    if w_total == 0.0 {
        return none;
    }

    let correction = delta * (stiffness * error / length);
    StickCorrection {
        offset_a: correction * (w_a / w_total),
        offset_b: -correction * (w_b / w_total),
        residual: none.residual,
    }
}

/// Applies a correction, leaving pinned endpoints untouched.
#[inline]
pub fn apply_correction(points: &mut [Point], stick: &Stick, c: &StickCorrection) {
    let a = &mut points[stick.a.index()];
    if !a.pinned {
        a.position += c.offset_a;
    }
    let b = &mut points[stick.b.index()];
    if !b.pinned {
        b.position += c.offset_b;
    }
}

/// Corrects one stick in place. Returns the residual before correction.
#[inline]
pub fn solve_stick(points: &mut [Point], stick: &Stick, stiffness: f32) -> f32 {
    let c = stick_correction(points, stick, stiffness);
    apply_correction(points, stick, &c);
    c.residual
}

/// Sequential relaxation in stick emission order.
#[derive(Debug, Default)]
pub struct GaussSeidelRelaxation;

impl GaussSeidelRelaxation {
    pub fn new() -> Self {
        Self
    }
}

impl SolverStrategy for GaussSeidelRelaxation {
    fn prepare(&mut self, _mesh: &ClothMesh) {}

    fn relax_pass(&mut self, points: &mut [Point], sticks: &[Stick], stiffness: f32) -> f32 {
        let mut max_residual = 0.0_f32;
        for stick in sticks {
            max_residual = max_residual.max(solve_stick(points, stick, stiffness));
        }
        max_residual
    }

    fn name(&self) -> &str {
        "gauss_seidel"
    }
}
