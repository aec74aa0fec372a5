#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for navmesh construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Distance under which two points are considered the same.
    ///
    /// Used for loop closure, shared-wall detection and point containment.
    pub tolerance: f32,

    /// Split scores within this many degrees of the best one count as ties.
    pub angle_tie_deg: f32,
}

impl BuildConfig {
    pub const DEFAULT_TOLERANCE: f32 = 1e-4;
    pub const DEFAULT_ANGLE_TIE_DEG: f32 = 1e-3;

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            angle_tie_deg: Self::DEFAULT_ANGLE_TIE_DEG,
        }
    }
}
