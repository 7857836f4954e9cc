//! Ring-shaped sampling domain on the ground plane

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::PlacementError;
use crate::foundation::math::{constants::TAU, utils, Vec3};

/// Serde default for `sweep`
fn full_turn() -> f32 {
    TAU
}

/// Bounds for scattering objects around the origin
///
/// Radius is sampled uniformly in `[inner_radius, outer_radius)` and angle
/// uniformly in `[0, sweep)`. A sweep larger than a full turn simply wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnulusSpec {
    /// Inner radius (inclusive)
    pub inner_radius: f32,
    /// Outer radius (exclusive)
    pub outer_radius: f32,
    /// Angular range in radians
    #[serde(default = "full_turn")]
    pub sweep: f32,
}

/// One polar sample drawn from an [`AnnulusSpec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnulusSample {
    /// Angle in radians, in `[0, sweep)`
    pub angle: f32,
    /// Distance from the origin, in `[inner, outer)`
    pub radius: f32,
}

impl AnnulusSample {
    /// World position of this sample at ground height `y`
    pub fn to_ground_point(&self, y: f32) -> Vec3 {
        utils::polar_to_ground(self.angle, self.radius, y)
    }
}

impl AnnulusSpec {
    /// Full-turn annulus
    pub const fn new(inner_radius: f32, outer_radius: f32) -> Self {
        Self { inner_radius, outer_radius, sweep: TAU }
    }

    /// Builder pattern: Set the angular range
    pub fn with_sweep(mut self, sweep: f32) -> Self {
        self.sweep = sweep;
        self
    }

    /// Reject degenerate or non-finite bounds
    pub fn validate(&self) -> Result<(), PlacementError> {
        let inner = self.inner_radius;
        let outer = self.outer_radius;

        if !inner.is_finite() || inner < 0.0 {
            return Err(PlacementError::InvalidInnerRadius { inner });
        }
        if !outer.is_finite() || inner >= outer {
            return Err(PlacementError::EmptyAnnulus { inner, outer });
        }
        if !self.sweep.is_finite() || self.sweep <= 0.0 {
            return Err(PlacementError::InvalidSweep(self.sweep));
        }
        Ok(())
    }

    /// Draw angle then radius
    pub fn sample(&self, rng: &mut dyn RandomSource) -> AnnulusSample {
        let angle = rng.range(0.0, self.sweep);
        let radius = rng.range(self.inner_radius, self.outer_radius);
        AnnulusSample { angle, radius }
    }

    /// Whether `radius` lies in `[inner, outer)`
    pub fn contains_radius(&self, radius: f32) -> bool {
        radius >= self.inner_radius && radius < self.outer_radius
    }
}
