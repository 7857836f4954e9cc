//! Overlap rules consulted while scattering props

use super::props::PlacedObject;
use crate::foundation::math::{utils, Vec3};

/// Decides whether a proposed position overlaps already placed props
pub trait CollisionRule {
    /// `true` when `proposed` is too close to any object in `placed`
    fn collides(&self, proposed: &Vec3, placed: &[PlacedObject]) -> bool;
}

impl<F> CollisionRule for F
where
    F: Fn(&Vec3, &[PlacedObject]) -> bool,
{
    fn collides(&self, proposed: &Vec3, placed: &[PlacedObject]) -> bool {
        self(proposed, placed)
    }
}

/// Keep-out circle around every placed prop
///
/// A proposal collides with a placed prop when their ground-plane distance is
/// less than that prop's scale plus `margin`. Only the existing prop's scale
/// counts; the newcomer's scale is not known yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMargin {
    /// Extra clearance in ground units
    pub margin: f32,
}

impl ScaleMargin {
    /// Create a rule with the given clearance
    pub const fn new(margin: f32) -> Self {
        Self { margin }
    }

    /// Keep-out radius around `object`
    pub fn keep_out(&self, object: &PlacedObject) -> f32 {
        object.scale + self.margin
    }
}

impl Default for ScaleMargin {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CollisionRule for ScaleMargin {
    fn collides(&self, proposed: &Vec3, placed: &[PlacedObject]) -> bool {
        placed
            .iter()
            .any(|object| utils::ground_distance(proposed, &object.position) < self.keep_out(object))
    }
}
