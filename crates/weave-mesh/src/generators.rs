//! Procedural cloth grid builder.
//!
//! Produces a deterministic, row-major grid of points with the top row
//! pinned, and emits sticks in a fixed order so that runs are reproducible.

use serde::{Deserialize, Serialize};
use weave_math::{from_array, Vec2};
use weave_types::constants::DEFAULT_SPACING;
use weave_types::{PointId, WeaveError, WeaveResult};

use crate::cloth::ClothMesh;
use crate::point::Point;
use crate::stick::{Stick, StickKind};

/// How many sticks the builder emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Horizontal and vertical neighbour links only.
    Minimal,
    /// Structural plus both cell diagonals plus two-hop links.
    #[default]
    Rich,
}

impl Density {
    /// Number of sticks `build_grid` emits for a `rows × cols` grid.
    pub fn expected_stick_count(self, rows: usize, cols: usize) -> usize {
        let structural = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
        match self {
            Density::Minimal => structural,
            Density::Rich => {
                let shear = 2 * rows.saturating_sub(1) * cols.saturating_sub(1);
                let bend = rows * cols.saturating_sub(2) + cols * rows.saturating_sub(2);
                structural + shear + bend
            }
        }
    }
}

/// Where points start out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Point `(row, col)` at `origin + (col, row) * spacing`.
    #[default]
    Grid,
    /// Every row on the top row's line. Vertical sticks start at zero
    /// length, so the cloth only unravels under rest-length growth.
    /// Only valid with [`Density::Minimal`].
    Gathered,
}

/// Grid construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of rows (row 0 is pinned).
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Nominal distance between neighbouring points.
    pub spacing: f32,
    /// Position of point `(0, 0)`.
    #[serde(default)]
    pub origin: [f32; 2],
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub placement: Placement,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            spacing: DEFAULT_SPACING,
            origin: [0.0, 0.0],
            density: Density::Rich,
            placement: Placement::Grid,
        }
    }
}

impl GridSpec {
    /// Creates a rich, grid-placed spec at the origin.
    pub fn new(rows: usize, cols: usize, spacing: f32) -> Self {
        Self {
            rows,
            cols,
            spacing,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: [f32; 2]) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Rejects grids that cannot form a cloth.
    pub fn validate(&self) -> WeaveResult<()> {
        if self.rows < 2 {
            return Err(WeaveError::InvalidTopology(format!(
                "rows must be at least 2, got {}",
                self.rows
            )));
        }
        if self.cols < 2 {
            return Err(WeaveError::InvalidTopology(format!(
                "cols must be at least 2, got {}",
                self.cols
            )));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(WeaveError::InvalidTopology(format!(
                "spacing must be positive and finite, got {}",
                self.spacing
            )));
        }
        if !(self.origin[0].is_finite() && self.origin[1].is_finite()) {
            return Err(WeaveError::InvalidTopology("origin must be finite".into()));
        }
        // Growth drives every stick toward one cap, so shear and bend links
        // measured on the collapsed layout would never reach grid lengths.
        if self.placement == Placement::Gathered && self.density == Density::Rich {
            return Err(WeaveError::InvalidTopology(
                "gathered placement requires minimal density".into(),
            ));
        }
        self.rows
            .checked_mul(self.cols)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                WeaveError::InvalidTopology(format!(
                    "{} x {} grid exceeds the point index range",
                    self.rows, self.cols
                ))
            })?;
        Ok(())
    }

    /// Initial position of `(row, col)` under this spec's placement.
    fn position(&self, row: usize, col: usize) -> Vec2 {
        let origin = from_array(self.origin);
        let x = col as f32 * self.spacing;
        let y = match self.placement {
            Placement::Grid => row as f32 * self.spacing,
            Placement::Gathered => 0.0,
        };
        origin + Vec2::new(x, y)
    }
}

/// Builds a cloth grid.
///
/// All points are created before any stick, so every stick index refers
/// into the final array. Rest lengths are measured from the initial
/// positions, which keeps non-uniform placements at rest on step zero.
///
/// Sticks are emitted per point in row-major order: right, down, the two
/// diagonals of the cell below-right (`tl→br`, `bl→tr`), two-hop right,
/// two-hop down. Diagonals and two-hop links only appear with
/// [`Density::Rich`].
///
/// # Example
/// ```
/// use weave_mesh::{build_grid, Density, GridSpec};
/// let mesh = build_grid(&GridSpec::new(3, 3, 10.0).with_density(Density::Minimal)).unwrap();
/// assert_eq!(mesh.point_count(), 9);
/// assert_eq!(mesh.stick_count(), 12);
/// ```
pub fn build_grid(spec: &GridSpec) -> WeaveResult<ClothMesh> {
    spec.validate()?;

    let rows = spec.rows;
    let cols = spec.cols;
    let rich = spec.density == Density::Rich;
    let id = |row: usize, col: usize| PointId((row * cols + col) as u32);

    let mut points = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let pos = spec.position(row, col);
            if row == 0 {
                points.push(Point::anchored(pos));
            } else {
                points.push(Point::new(pos));
            }
        }
    }

    let mut sticks = Vec::with_capacity(spec.density.expected_stick_count(rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let here = id(row, col);

            let mut link = |a: PointId, b: PointId, kind: StickKind| {
                sticks.push(Stick::between(a, b, &points, kind));
            };

            if col + 1 < cols {
                link(here, id(row, col + 1), StickKind::Structural);
            }
            if row + 1 < rows {
                link(here, id(row + 1, col), StickKind::Structural);
            }

            if !rich {
                continue;
            }

            if col + 1 < cols && row + 1 < rows {
                link(here, id(row + 1, col + 1), StickKind::Shear);
                link(id(row + 1, col), id(row, col + 1), StickKind::Shear);
            }
            if col + 2 < cols {
                link(here, id(row, col + 2), StickKind::Bend);
            }
            if row + 2 < rows {
                link(here, id(row + 2, col), StickKind::Bend);
            }
        }
    }

    tracing::debug!(
        rows,
        cols,
        points = points.len(),
        sticks = sticks.len(),
        density = ?spec.density,
        placement = ?spec.placement,
        "built cloth grid"
    );

    ClothMesh::from_parts(points, sticks, rows, cols)
}
