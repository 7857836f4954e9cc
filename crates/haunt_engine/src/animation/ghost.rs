//! Ghost lights drifting around fixed anchors
//!
//! Each ghost is a point light with a translucent sphere attached. Its anchor
//! and angular speed are drawn once at spawn; every frame the live position is
//! recomputed from the anchor and the elapsed scene time alone, so the motion
//! never accumulates error and can be evaluated at any time out of order.

use crate::core::config::GhostConfig;
use crate::foundation::color::Color;
use crate::foundation::math::{constants::TAU, utils, Vec3};
use crate::procedural::random::RandomSource;
use crate::scene::lighting::Light;

/// Radius of the drift circle around each anchor, in ground units
///
/// Independent of the anchor's distance from the tower.
pub const GHOST_ORBIT_AMPLITUDE: f32 = 1.0;

/// Position on the drift circle at `elapsed` seconds
///
/// `x = anchor.x + sin(elapsed * speed)` and `z = anchor.z + cos(elapsed * speed)`;
/// height stays at the anchor's.
pub fn orbit_position(anchor: &Vec3, speed: f32, elapsed: f32) -> Vec3 {
    let phase = elapsed * speed;
    Vec3::new(
        anchor.x + phase.sin() * GHOST_ORBIT_AMPLITUDE,
        anchor.y,
        anchor.z + phase.cos() * GHOST_ORBIT_AMPLITUDE,
    )
}

/// Translucent sphere drawn at a ghost light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostVisual {
    /// Sphere radius
    pub radius: f32,
    /// Sphere color
    pub color: Color,
    /// Sphere opacity (0 = invisible)
    pub opacity: f32,
}

/// One ghost: immutable anchor and speed, plus its light
#[derive(Debug, Clone, PartialEq)]
pub struct GhostState {
    anchor: Vec3,
    speed: f32,
    /// Point light; its position is the ghost's live position
    pub light: Light,
    /// Attached sphere
    pub visual: GhostVisual,
}

impl GhostState {
    /// Ghost resting at `anchor`, lit by `light`
    pub fn new(anchor: Vec3, speed: f32, light: Light, visual: GhostVisual) -> Self {
        let mut light = light;
        light.position = anchor;
        Self { anchor, speed, light, visual }
    }

    /// Draw a ghost from `config`
    ///
    /// Samples are drawn as angle, radius, height, then speed.
    pub fn spawn(config: &GhostConfig, rng: &mut dyn RandomSource) -> Self {
        let angle = rng.range(0.0, TAU);
        let radius = config.anchor_radius.sample(rng);
        let height = config.anchor_height.sample(rng);
        let speed = config.speed.sample(rng);

        let anchor = utils::polar_to_ground(angle, radius, height);
        let light = Light::point(anchor, config.color, config.intensity, config.range).with_shadows(true);
        let visual = GhostVisual {
            radius: config.visual_radius,
            color: config.color,
            opacity: config.visual_opacity,
        };
        Self::new(anchor, speed, light, visual)
    }

    /// Fixed centre of the drift circle
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Angular speed, radians per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Live position
    pub fn position(&self) -> Vec3 {
        self.light.position
    }

    /// Move to the drift position at `elapsed`
    pub fn update(&mut self, elapsed: f32) {
        let target = orbit_position(&self.anchor, self.speed, elapsed);
        self.light.position.x = target.x;
        self.light.position.z = target.z;
    }
}

/// Spawn `config.count` ghosts
pub fn spawn_ghosts(config: &GhostConfig, rng: &mut dyn RandomSource) -> Vec<GhostState> {
    let ghosts: Vec<GhostState> = (0..config.count).map(|_| GhostState::spawn(config, rng)).collect();
    log::debug!("Spawned {} ghosts", ghosts.len());
    ghosts
}

/// Advance every ghost to scene time `elapsed` (seconds since start)
pub fn tick(elapsed: f32, ghosts: &mut [GhostState]) {
    debug_assert!(elapsed >= 0.0, "scene time runs forward from zero");
    for ghost in ghosts.iter_mut() {
        ghost.update(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI};
    use crate::procedural::random::{seeded, SequenceSource};
    use approx::assert_relative_eq;

    fn ghost_at(anchor: Vec3, speed: f32) -> GhostState {
        let light = Light::point(Vec3::zeros(), Color::WHITE, 2.0, 5.0);
        let visual = GhostVisual { radius: 0.8, color: Color::WHITE, opacity: 0.5 };
        GhostState::new(anchor, speed, light, visual)
    }

    #[test]
    fn test_start_position_is_one_unit_along_z() {
        let mut ghosts = [ghost_at(Vec3::new(3.0, 2.0, -4.0), 1.7)];
        tick(0.0, &mut ghosts);
        assert_relative_eq!(ghosts[0].position(), Vec3::new(3.0, 2.0, -3.0));
    }

    #[test]
    fn test_two_ghosts_quarter_turn() {
        let mut ghosts = [
            ghost_at(Vec3::new(5.0, 0.0, 0.0), 1.0),
            ghost_at(Vec3::new(0.0, 0.0, 5.0), 1.0),
        ];
        tick(HALF_PI, &mut ghosts);
        assert_relative_eq!(ghosts[0].position(), Vec3::new(6.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(ghosts[1].position(), Vec3::new(1.0, 0.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn test_motion_is_periodic() {
        let anchor = Vec3::new(-11.0, 4.0, 2.0);
        let speed = 0.75;
        let period = TAU / speed;
        for t in [0.0, 0.3, 1.9, 7.0] {
            let a = orbit_position(&anchor, speed, t);
            let b = orbit_position(&anchor, speed, t + period);
            assert_relative_eq!(a, b, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_height_never_changes() {
        let mut ghosts = [ghost_at(Vec3::new(10.0, 3.5, 0.0), 2.9)];
        for frame in 0..120 {
            tick(frame as f32 / 60.0, &mut ghosts);
            assert_eq!(ghosts[0].position().y, 3.5);
            assert_eq!(ghosts[0].anchor(), Vec3::new(10.0, 3.5, 0.0));
        }
    }

    #[test]
    fn test_tick_is_repeatable() {
        let mut a = [ghost_at(Vec3::new(12.0, 1.0, -3.0), 0.4)];
        let mut b = a.clone();
        tick(5.0, &mut a);
        tick(99.0, &mut b);
        tick(5.0, &mut b);
        assert_eq!(a[0].position().x.to_bits(), b[0].position().x.to_bits());
        assert_eq!(a[0].position().z.to_bits(), b[0].position().z.to_bits());
    }

    #[test]
    fn test_spawn_draw_order() {
        // angle, radius, height, speed
        let mut rng = SequenceSource::new([0.5, 0.0, 0.0, 0.0]);
        let ghost = GhostState::spawn(&GhostConfig::default(), &mut rng);
        assert_eq!(rng.drawn(), 4);
        assert_relative_eq!(ghost.anchor(), Vec3::new(-10.0, 1.0, PI.sin() * 10.0), epsilon = 1e-5);
        assert_relative_eq!(ghost.speed(), 0.005);
        assert_eq!(ghost.position(), ghost.anchor());
        assert!(ghost.light.casts_shadow);
    }

    #[test]
    fn test_spawned_ranges() {
        let config = GhostConfig::default();
        let mut rng = seeded(77);
        let ghosts = spawn_ghosts(&config, &mut rng);
        assert_eq!(ghosts.len(), 10);
        for ghost in &ghosts {
            let anchor = ghost.anchor();
            let radius = utils::ground(&anchor).magnitude();
            assert!((10.0 - 1e-4..15.0 + 1e-4).contains(&radius));
            assert!(config.anchor_height.contains(anchor.y));
            assert!(config.speed.contains(ghost.speed()));
            assert_relative_eq!(ghost.light.intensity, 2.0);
            assert_relative_eq!(ghost.light.range, 5.0);
            assert_relative_eq!(ghost.visual.opacity, 0.5);
        }
    }
}
