//! # weave-mesh
//!
//! Cloth topology for the Weave engine: a fixed array of mass points and
//! a list of distance sticks that refer into it by index.
//!
//! ## Key Types
//!
//! - [`Point`]: A Verlet mass node (position, previous position, pinned flag).
//! - [`Stick`]: A distance constraint between two points.
//! - [`ClothMesh`]: Owns both arrays; the point array never resizes.
//! - [`build_grid`]: Row-major grid builder with minimal or rich density.

pub mod cloth;
pub mod generators;
pub mod point;
pub mod stick;

pub use cloth::{ClothMesh, StickCounts};
pub use generators::{build_grid, Density, GridSpec, Placement};
pub use point::Point;
pub use stick::{Stick, StickKind};
