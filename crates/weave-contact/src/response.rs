//! Contact resolution results.

use serde::{Deserialize, Serialize};

/// Result of a contact pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    /// Number of points moved back onto the contact surface.
    pub resolved_count: u32,
    /// Deepest penetration seen before resolution.
    pub max_penetration: f32,
}

impl ContactResult {
    /// Combines two passes over the same step.
    pub fn merge(self, other: ContactResult) -> ContactResult {
        ContactResult {
            resolved_count: self.resolved_count + other.resolved_count,
            max_penetration: self.max_penetration.max(other.max_penetration),
        }
    }
}
