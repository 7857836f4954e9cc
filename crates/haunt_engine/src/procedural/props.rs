//! Scattered scene props and the factories that decorate them

use serde::{Deserialize, Serialize};

use super::random::{RandomSource, SampleRange};
use crate::foundation::math::{constants::{PI, TAU}, Transform, Vec3};

/// Kinds of scattered props
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropKind {
    /// Grave marker around the tower
    Tombstone,
    /// Shrub close to the tower
    Bush,
}

/// A prop placed on the ground plane
///
/// Created once at scene build time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    /// What was placed
    pub kind: PropKind,
    /// World position; `y` is the kind's ground height
    pub position: Vec3,
    /// Uniform scale
    pub scale: f32,
    /// Euler angles in radians (x tilt, y yaw, z tilt)
    pub rotation: Vec3,
    /// Whether the renderer should include this prop in shadow maps
    pub casts_shadow: bool,
}

impl PlacedObject {
    /// Unplaced prop at the origin with unit scale
    pub fn new(kind: PropKind) -> Self {
        Self {
            kind,
            position: Vec3::zeros(),
            scale: 1.0,
            rotation: Vec3::zeros(),
            casts_shadow: false,
        }
    }

    /// World transform for the renderer
    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position)
            .with_rotation_euler(self.rotation.x, self.rotation.y, self.rotation.z)
            .with_uniform_scale(self.scale)
    }
}

/// Creates one decorated prop per accepted position
///
/// The placement pass assigns the position and the shadow flag afterwards.
pub trait PropFactory {
    /// Kind produced by this factory
    fn kind(&self) -> PropKind;

    /// Height of the prop's origin above the ground plane
    fn ground_height(&self) -> f32 {
        0.0
    }

    /// Build the prop, drawing any per-instance variation from `rng`
    fn create(&self, rng: &mut dyn RandomSource) -> PlacedObject;
}

/// Tombstones vary in size, facing and lean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TombstoneFactory {
    /// Uniform scale range
    pub scale: SampleRange,
    /// Largest lean around the Z axis, radians
    pub max_tilt: f32,
}

impl Default for TombstoneFactory {
    fn default() -> Self {
        Self {
            scale: SampleRange::new(0.5, 1.5),
            max_tilt: PI * 0.01,
        }
    }
}

impl PropFactory for TombstoneFactory {
    fn kind(&self) -> PropKind {
        PropKind::Tombstone
    }

    fn create(&self, rng: &mut dyn RandomSource) -> PlacedObject {
        let scale = self.scale.sample(rng);
        let yaw = rng.range(0.0, TAU);
        let tilt = rng.range(0.0, self.max_tilt);

        PlacedObject {
            scale,
            rotation: Vec3::new(0.0, yaw, tilt),
            ..PlacedObject::new(PropKind::Tombstone)
        }
    }
}

/// Bushes are identical spheres resting half above the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BushFactory {
    /// Height of the bush centre
    pub ground_height: f32,
}

impl Default for BushFactory {
    fn default() -> Self {
        Self { ground_height: 0.5 }
    }
}

impl PropFactory for BushFactory {
    fn kind(&self) -> PropKind {
        PropKind::Bush
    }

    fn ground_height(&self) -> f32 {
        self.ground_height
    }

    fn create(&self, _rng: &mut dyn RandomSource) -> PlacedObject {
        PlacedObject::new(PropKind::Bush)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::random::{seeded, SequenceSource};
    use approx::assert_relative_eq;

    #[test]
    fn test_tombstone_variation_ranges() {
        let factory = TombstoneFactory::default();
        let mut rng = seeded(11);
        for _ in 0..500 {
            let tombstone = factory.create(&mut rng);
            assert!(tombstone.scale >= 0.5 && tombstone.scale < 1.5);
            assert!(tombstone.rotation.y >= 0.0 && tombstone.rotation.y < TAU);
            assert!(tombstone.rotation.z >= 0.0 && tombstone.rotation.z < PI * 0.01);
            assert_eq!(tombstone.rotation.x, 0.0);
            assert!(!tombstone.casts_shadow);
        }
    }

    #[test]
    fn test_tombstone_draw_order() {
        // scale, then yaw, then tilt
        let mut rng = SequenceSource::new([0.5, 0.5, 0.5]);
        let tombstone = TombstoneFactory::default().create(&mut rng);
        assert_relative_eq!(tombstone.scale, 1.0);
        assert_relative_eq!(tombstone.rotation.y, PI, epsilon = 1e-6);
        assert_relative_eq!(tombstone.rotation.z, PI * 0.005, epsilon = 1e-6);
    }

    #[test]
    fn test_bush_draws_nothing() {
        let mut rng = SequenceSource::new([0.3]);
        let bush = BushFactory::default().create(&mut rng);
        assert_eq!(rng.drawn(), 0);
        assert_eq!(bush.kind, PropKind::Bush);
        assert_eq!(bush.scale, 1.0);
        assert_relative_eq!(BushFactory::default().ground_height(), 0.5);
    }

    #[test]
    fn test_transform_carries_scale() {
        let mut object = PlacedObject::new(PropKind::Tombstone);
        object.position = Vec3::new(4.0, 0.0, -9.0);
        object.scale = 1.25;
        let transform = object.transform();
        assert_eq!(transform.position, object.position);
        assert_relative_eq!(transform.scale, Vec3::new(1.25, 1.25, 1.25));
    }

    #[test]
    fn test_transform_yaw_turns_about_up_axis() {
        let mut object = PlacedObject::new(PropKind::Tombstone);
        object.rotation.y = PI / 2.0;
        let rotation = object.transform().rotation;
        assert_relative_eq!(rotation * Vec3::x(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(rotation * Vec3::y(), Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_transform_tilt_leans_about_forward_axis() {
        let mut object = PlacedObject::new(PropKind::Tombstone);
        object.rotation.z = PI / 2.0;
        let rotation = object.transform().rotation;
        assert_relative_eq!(rotation * Vec3::x(), Vec3::y(), epsilon = 1e-6);
        assert_relative_eq!(rotation * Vec3::z(), Vec3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_tilt_follows_yaw() {
        // Tilt leans the stone in its own frame, so its lean direction turns with the yaw
        let mut object = PlacedObject::new(PropKind::Tombstone);
        object.rotation = Vec3::new(0.0, PI / 2.0, PI / 2.0);
        let up = object.transform().rotation * Vec3::y();
        assert_relative_eq!(up, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }
}
