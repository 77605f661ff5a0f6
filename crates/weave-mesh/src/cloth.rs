//! The cloth mesh: a fixed point array plus the sticks that refer into it.
//!
//! Layout is row-major: the point at `(row, col)` has index
//! `row * cols + col`, row 0 being the top (pinned) row.

use serde::{Deserialize, Serialize};
use weave_math::Vec2;
use weave_types::{PointId, WeaveError, WeaveResult};

use crate::point::Point;
use crate::stick::{Stick, StickKind};

/// Points and sticks of a cloth.
///
/// Fields are private so that nothing can grow or shrink the point array
/// after construction: mutable access is only handed out as slices, which
/// keeps every `PointId` held by a stick valid for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothMesh {
    points: Vec<Point>,
    sticks: Vec<Stick>,
    rows: usize,
    cols: usize,
}

/// Number of sticks of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickCounts {
    pub structural: usize,
    pub shear: usize,
    pub bend: usize,
}

impl StickCounts {
    /// Sum over all kinds.
    pub fn total(&self) -> usize {
        self.structural + self.shear + self.bend
    }
}

impl ClothMesh {
    /// Assembles a mesh from explicit arrays and validates it.
    ///
    /// `rows * cols` must equal the number of points. Used for hand-built
    /// layouts; grids should come from [`build_grid`](crate::build_grid).
    pub fn from_parts(
        points: Vec<Point>,
        sticks: Vec<Stick>,
        rows: usize,
        cols: usize,
    ) -> WeaveResult<Self> {
        let mesh = Self {
            points,
            sticks,
            rows,
            cols,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of sticks.
    #[inline]
    pub fn stick_count(&self) -> usize {
        self.sticks.len()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> PointId {
        PointId((row * self.cols + col) as u32)
    }

    /// The point at `(row, col)`.
    #[inline]
    pub fn point_at(&self, row: usize, col: usize) -> &Point {
        &self.points[self.index(row, col).index()]
    }

    /// Read-only point array, in row-major order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Read-only stick array, in emission order.
    #[inline]
    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    /// Mutable point slice. The length cannot change through it.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Mutable stick slice, for rest-length updates.
    #[inline]
    pub fn sticks_mut(&mut self) -> &mut [Stick] {
        &mut self.sticks
    }

    /// Both arrays at once, for the relaxation solver.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Point], &mut [Stick]) {
        (&mut self.points, &mut self.sticks)
    }

    /// Current positions of all points.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Line segments for drawing, one per stick.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.sticks.iter().map(move |s| {
            (
                self.points[s.a.index()].position,
                self.points[s.b.index()].position,
            )
        })
    }

    /// Number of pinned points.
    pub fn pinned_count(&self) -> usize {
        self.points.iter().filter(|p| p.pinned).count()
    }

    /// Tally of sticks per kind.
    pub fn count_by_kind(&self) -> StickCounts {
        let mut counts = StickCounts::default();
        for s in &self.sticks {
            match s.kind {
                StickKind::Structural => counts.structural += 1,
                StickKind::Shear => counts.shear += 1,
                StickKind::Bend => counts.bend += 1,
            }
        }
        counts
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - `rows * cols` matches the point count
    /// - Every stick endpoint is in range and the two endpoints differ
    /// - Rest lengths are finite and non-negative
    pub fn validate(&self) -> WeaveResult<()> {
        let n = self.points.len();

        if self.rows == 0 || self.cols == 0 || self.rows * self.cols != n {
            return Err(WeaveError::InvalidTopology(format!(
                "{} rows x {} cols does not match point count {}",
                self.rows, self.cols, n
            )));
        }

        for (i, s) in self.sticks.iter().enumerate() {
            if s.a.index() >= n || s.b.index() >= n {
                return Err(WeaveError::InvalidTopology(format!(
                    "Stick {} references point out of range: ({}, {}) with {} points",
                    i, s.a.0, s.b.0, n
                )));
            }
            if s.a == s.b {
                return Err(WeaveError::InvalidTopology(format!(
                    "Stick {} connects point {} to itself",
                    i, s.a.0
                )));
            }
            if !s.rest_length.is_finite() || s.rest_length < 0.0 {
                return Err(WeaveError::InvalidTopology(format!(
                    "Stick {} has invalid rest length {}",
                    i, s.rest_length
                )));
            }
        }

        Ok(())
    }
}
