//! Strongly-typed point identifier.
//!
//! Sticks refer to their endpoints by `PointId` rather than by reference,
//! so the point array can be mutated in place while sticks stay valid.

use serde::{Deserialize, Serialize};

/// Index into the point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
