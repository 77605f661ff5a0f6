//! # weave-contact
//!
//! Contact handling for cloth simulation.
//!
//! - [`Floor`]: One-sided inelastic collision against a horizontal line.
//! - [`StickColoring`]: Groups sticks into batches with no shared endpoint,
//!   so a batch can be corrected without write conflicts.

pub mod coloring;
pub mod floor;
pub mod response;

pub use coloring::StickColoring;
pub use floor::Floor;
pub use response::ContactResult;
