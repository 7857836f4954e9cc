//! The haunted tower scene
//!
//! Builds every static part once, then only the ghosts move.

use thiserror::Error;

use crate::animation::{self, GhostState};
use crate::core::config::{BushConfig, Config, ConfigError, HauntedSceneConfig, TombstoneConfig};
use crate::foundation::color::Color;
use crate::procedural::{
    place_scattered, BushFactory, PlacedObject, PlacementError, PropKind, RandomSource, ScaleMargin,
    TombstoneFactory,
};

use super::camera::Camera;
use super::group::Group;
use super::lighting::{Fog, LightingEnvironment};
use super::primitives::{tower_meshes, MeshNode, Primitive};

/// Scene construction errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Configuration failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scatter pass rejected its arguments
    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),
}

/// Scatter tombstones around the tower
///
/// Each tombstone keeps clear of the ones placed before it.
pub fn place_tombstones(
    config: &TombstoneConfig,
    rng: &mut dyn RandomSource,
) -> Result<Group<PlacedObject>, PlacementError> {
    let factory = TombstoneFactory {
        scale: config.scale,
        max_tilt: config.max_tilt,
    };
    let rule = ScaleMargin::new(config.collision_margin);
    let batch = place_scattered(config.count, &config.annulus, config.max_attempts, Some(&rule), &factory, rng)?;

    if !batch.exhausted.is_empty() {
        log::info!("{} of {} tombstones may overlap a neighbour", batch.exhausted.len(), batch.len());
    }

    let mut group = Group::new("tombstones");
    group.extend(batch.into_objects());
    Ok(group)
}

/// Scatter bushes near the tower; bushes may overlap
pub fn place_bushes(config: &BushConfig, rng: &mut dyn RandomSource) -> Result<Group<PlacedObject>, PlacementError> {
    let factory = BushFactory { ground_height: config.height };
    // Without a collision rule every prop takes its first proposal.
    let batch = place_scattered(config.count, &config.annulus, 1, None, &factory, rng)?;

    let mut group = Group::new("bushes");
    group.extend(batch.into_objects());
    Ok(group)
}

/// Complete scene description handed to the renderer
#[derive(Debug, Clone)]
pub struct HauntedScene {
    /// Ground and tower meshes
    pub tower: Group<MeshNode>,
    /// Scattered tombstones
    pub tombstones: Group<PlacedObject>,
    /// Scattered bushes
    pub bushes: Group<PlacedObject>,
    /// Ghost lights
    pub ghosts: Group<GhostState>,
    /// Static lights
    pub lighting: LightingEnvironment,
    /// Distance fog; its color is also the clear color
    pub fog: Fog,
    /// Viewing camera
    pub camera: Camera,
    /// Tombstone material color
    pub tombstone_color: Color,
    /// Bush material color
    pub bush_color: Color,
    /// Bush sphere radius
    pub bush_radius: f32,
}

impl HauntedScene {
    /// Validate `config` and build the scene
    ///
    /// Random draws happen in a fixed order (tombstones, bushes, ghosts), so
    /// the same seed always yields the same scene.
    pub fn build(config: &HauntedSceneConfig, rng: &mut dyn RandomSource) -> Result<Self, SceneError> {
        config.validate()?;
        log::info!("Building haunted tower scene...");

        let mut tower = Group::new("tower");
        tower.extend(tower_meshes(&config.tower));

        let tombstones = place_tombstones(&config.tombstones, rng)?;
        let bushes = place_bushes(&config.bushes, rng)?;

        let mut ghosts = Group::new("ghosts");
        ghosts.extend(animation::spawn_ghosts(&config.ghosts, rng));

        let scene = Self {
            tower,
            tombstones,
            bushes,
            ghosts,
            lighting: LightingEnvironment::haunted_night(&config.lighting),
            fog: Fog::from_config(&config.fog),
            camera: Camera::from_config(&config.camera),
            tombstone_color: config.tombstones.color,
            bush_color: config.bushes.color,
            bush_radius: config.bushes.radius,
        };

        log::info!(
            "Scene ready: {} tower meshes, {} tombstones, {} bushes, {} ghosts, {} lights",
            scene.tower.len(),
            scene.tombstones.len(),
            scene.bushes.len(),
            scene.ghosts.len(),
            scene.lighting.lights.len()
        );
        Ok(scene)
    }

    /// Advance the ghosts to scene time `elapsed`
    pub fn update(&mut self, elapsed: f32) {
        animation::tick(elapsed, self.ghosts.as_mut_slice());
    }

    /// Renderable mesh for a scattered prop
    pub fn prop_mesh(&self, object: &PlacedObject) -> MeshNode {
        let (name, primitive, color) = match object.kind {
            PropKind::Tombstone => ("tombstone", Primitive::TOMBSTONE, self.tombstone_color),
            PropKind::Bush => ("bush", Primitive::Sphere { radius: self.bush_radius }, self.bush_color),
        };
        let mut mesh = MeshNode::new(name, primitive, color).with_transform(object.transform());
        mesh.casts_shadow = object.casts_shadow;
        mesh
    }

    /// Clear color for the frame
    pub fn clear_color(&self) -> Color {
        self.fog.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{utils, Vec3};
    use crate::procedural::random::seeded;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_default_scene() {
        let mut rng = seeded(1234);
        let scene = HauntedScene::build(&HauntedSceneConfig::default(), &mut rng).unwrap();

        assert_eq!(scene.tower.len(), 5);
        assert_eq!(scene.tombstones.len(), 100);
        assert_eq!(scene.bushes.len(), 20);
        assert_eq!(scene.ghosts.len(), 10);
        assert_eq!(scene.lighting.lights.len(), 3);
        assert_eq!(scene.clear_color(), Color::from_hex("#082f2b").unwrap());
    }

    #[test]
    fn test_tombstones_stay_in_ring() {
        let mut rng = seeded(5);
        let group = place_tombstones(&TombstoneConfig::default(), &mut rng).unwrap();
        for position in group.positions() {
            let radius = utils::ground(&position).magnitude();
            assert!((8.0 - 1e-4..23.0 + 1e-4).contains(&radius), "radius {radius}");
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_bushes_stay_near_tower() {
        let mut rng = seeded(6);
        let group = place_bushes(&BushConfig::default(), &mut rng).unwrap();
        assert_eq!(group.len(), 20);
        for bush in &group {
            assert!(utils::ground(&bush.position).magnitude() < 16.0 + 1e-4);
            assert_relative_eq!(bush.position.y, 0.5);
            assert!(bush.casts_shadow);
        }
    }

    #[test]
    fn test_update_moves_only_ghosts() {
        let mut rng = seeded(99);
        let mut scene = HauntedScene::build(&HauntedSceneConfig::default(), &mut rng).unwrap();
        let tombstones = scene.tombstones.clone();

        scene.update(0.0);
        for ghost in scene.ghosts.iter() {
            let expected = ghost.anchor() + Vec3::new(0.0, 0.0, 1.0);
            assert_relative_eq!(ghost.position(), expected, epsilon = 1e-5);
        }
        scene.update(2.5);
        assert_eq!(scene.tombstones, tombstones);
    }

    #[test]
    fn test_prop_mesh_follows_kind() {
        let mut rng = seeded(3);
        let scene = HauntedScene::build(&HauntedSceneConfig::default(), &mut rng).unwrap();

        let grave = &scene.tombstones.as_slice()[0];
        let mesh = scene.prop_mesh(grave);
        assert_eq!(mesh.primitive, Primitive::TOMBSTONE);
        assert_eq!(mesh.transform.position, grave.position);
        assert!(mesh.casts_shadow);

        let bush = scene.prop_mesh(&PlacedObject::new(PropKind::Bush));
        assert_eq!(bush.primitive, Primitive::Sphere { radius: 0.7 });
    }

    #[test]
    fn test_invalid_config_fails_before_drawing() {
        let mut config = HauntedSceneConfig::default();
        config.tombstones.max_attempts = 0;
        let mut rng = seeded(1);
        assert!(matches!(
            HauntedScene::build(&config, &mut rng),
            Err(SceneError::Config(ConfigError::Invalid { section: "tombstones", .. }))
        ));
    }
}
