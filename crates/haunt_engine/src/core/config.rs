//! # Unified Configuration System
//!
//! Every tunable of the haunted tower scene lives here, grouped by
//! subsystem. All sections deserialize with defaults for missing fields, so a
//! config file only needs to mention what it changes.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging, frame pacing, random seed
//! - **Tower Config**: dimensions and colors of the central tower
//! - **Tombstone / Bush Config**: scatter counts, annuli, variation
//! - **Ghost Config**: ghost light spawn ranges and light parameters
//! - **Lighting / Fog / Camera Config**: static scene setup

use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::color::Color;
use crate::foundation::math::{constants::PI, Vec3};
use crate::procedural::{AnnulusSpec, SampleRange, DEFAULT_MAX_ATTEMPTS};

// Re-export from the config module for compatibility
pub use crate::config::{Config, ConfigError};

const TOMBSTONE_ANNULUS: AnnulusSpec = AnnulusSpec::new(8.0, 23.0);
const TOMBSTONE_SCALE: SampleRange = SampleRange::new(0.5, 1.5);
const BUSH_ANNULUS: AnnulusSpec = AnnulusSpec {
    inner_radius: 0.0,
    outer_radius: 16.0,
    sweep: PI * 3.0,
};
const GHOST_SPEED: SampleRange = SampleRange::new(0.005, 3.005);
const GHOST_ANCHOR_RADIUS: SampleRange = SampleRange::new(10.0, 15.0);
const GHOST_ANCHOR_HEIGHT: SampleRange = SampleRange::new(1.0, 6.0);

/// # Engine Configuration
///
/// Core loop behavior: logging, pacing, and reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Target FPS for frame rate limiting (`None` runs unthrottled)
    pub target_fps: Option<u32>,
    /// Stop after this many frames (`None` runs until quit)
    pub max_frames: Option<u64>,
    /// Seed for scene generation (`None` seeds from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            target_fps: Some(60),
            max_frames: None,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    /// Limit the number of frames
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Fix the scene seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == Some(0) {
            return Err(ConfigError::invalid("engine", "target_fps must be at least 1"));
        }
        Ok(())
    }
}

/// # Tower Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    /// Side length of the square ground plane
    pub floor_size: f32,
    /// Radius of the tower walls
    pub wall_radius: f32,
    /// Height of the tower walls
    pub wall_height: f32,
    /// Base radius of the conical roof
    pub roof_radius: f32,
    /// Height of the conical roof
    pub roof_height: f32,
    /// Ground color
    pub floor_color: Color,
    /// Wall color
    pub wall_color: Color,
    /// Roof color
    pub roof_color: Color,
    /// Stone frame around the door
    pub door_frame_color: Color,
    /// Door color
    pub door_color: Color,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            floor_size: 50.0,
            wall_radius: 2.0,
            wall_height: 10.0,
            roof_radius: 2.5,
            roof_height: 2.0,
            floor_color: Color::from_rgb8(0x5b, 0x84, 0x4c),
            wall_color: Color::from_rgb8(0x8c, 0x6b, 0x5c),
            roof_color: Color::from_rgb8(0x88, 0x54, 0x32),
            door_frame_color: Color::from_rgb8(0x6c, 0x75, 0x7d),
            door_color: Color::from_rgb8(0x73, 0x4d, 0x2e),
        }
    }
}

impl TowerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("floor_size", self.floor_size),
            ("wall_radius", self.wall_radius),
            ("wall_height", self.wall_height),
            ("roof_radius", self.roof_radius),
            ("roof_height", self.roof_height),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid("tower", format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

/// # Tombstone Configuration
///
/// Tombstones ring the tower and keep clear of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TombstoneConfig {
    /// Number of tombstones
    pub count: usize,
    /// Proposals per tombstone before settling for an overlap
    pub max_attempts: u32,
    /// Clearance added to a placed tombstone's scale
    pub collision_margin: f32,
    /// Largest lean, radians
    pub max_tilt: f32,
    /// Stone color
    pub color: Color,
    /// Placement ring
    #[serde(deserialize_with = "partial::tombstone_annulus")]
    pub annulus: AnnulusSpec,
    /// Uniform scale range
    #[serde(deserialize_with = "partial::tombstone_scale")]
    pub scale: SampleRange,
}

impl Default for TombstoneConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            collision_margin: 1.0,
            max_tilt: PI * 0.01,
            color: Color::from_rgb8(0xa0, 0xa1, 0x9f),
            annulus: TOMBSTONE_ANNULUS,
            scale: TOMBSTONE_SCALE,
        }
    }
}

impl TombstoneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.annulus
            .validate()
            .map_err(|e| ConfigError::invalid("tombstones", e.to_string()))?;
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid("tombstones", "max_attempts must be at least 1"));
        }
        if !(self.collision_margin.is_finite() && self.collision_margin >= 0.0) {
            return Err(ConfigError::invalid("tombstones", "collision_margin must be non-negative"));
        }
        if !(self.scale.is_valid() && self.scale.min > 0.0) {
            return Err(ConfigError::invalid("tombstones", "scale range must be positive and ordered"));
        }
        if !(self.max_tilt.is_finite() && self.max_tilt >= 0.0) {
            return Err(ConfigError::invalid("tombstones", "max_tilt must be non-negative"));
        }
        Ok(())
    }
}

/// # Bush Configuration
///
/// Bushes cluster near the tower and may overlap each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BushConfig {
    /// Number of bushes
    pub count: usize,
    /// Height of the bush centre above the ground
    pub height: f32,
    /// Sphere radius of a bush
    pub radius: f32,
    /// Foliage color
    pub color: Color,
    /// Placement disc; the sweep wraps past a full turn
    #[serde(deserialize_with = "partial::bush_annulus")]
    pub annulus: AnnulusSpec,
}

impl Default for BushConfig {
    fn default() -> Self {
        Self {
            count: 20,
            height: 0.5,
            radius: 0.7,
            color: Color::from_rgb8(0x5c, 0x99, 0x5c),
            annulus: BUSH_ANNULUS,
        }
    }
}

impl BushConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.annulus
            .validate()
            .map_err(|e| ConfigError::invalid("bushes", e.to_string()))?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::invalid("bushes", "radius must be positive"));
        }
        Ok(())
    }
}

/// # Ghost Configuration
///
/// Ghosts are point lights drifting around anchors scattered outside the
/// tombstone ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Number of ghosts
    pub count: usize,
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
    /// Light range
    pub range: f32,
    /// Radius of the translucent sphere drawn at the light
    pub visual_radius: f32,
    /// Opacity of that sphere
    pub visual_opacity: f32,
    /// Angular speed range, radians per second
    #[serde(deserialize_with = "partial::ghost_speed")]
    pub speed: SampleRange,
    /// Anchor distance from the tower
    #[serde(deserialize_with = "partial::ghost_anchor_radius")]
    pub anchor_radius: SampleRange,
    /// Anchor height above the ground
    #[serde(deserialize_with = "partial::ghost_anchor_height")]
    pub anchor_height: SampleRange,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            count: 10,
            color: Color::WHITE,
            intensity: 2.0,
            range: 5.0,
            visual_radius: 0.8,
            visual_opacity: 0.5,
            speed: GHOST_SPEED,
            anchor_radius: GHOST_ANCHOR_RADIUS,
            anchor_height: GHOST_ANCHOR_HEIGHT,
        }
    }
}

impl GhostConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_valid() && self.speed.min > 0.0) {
            return Err(ConfigError::invalid("ghosts", "speed range must be positive and ordered"));
        }
        if !(self.anchor_radius.is_valid() && self.anchor_radius.min >= 0.0) {
            return Err(ConfigError::invalid("ghosts", "anchor_radius range must be non-negative and ordered"));
        }
        if !self.anchor_height.is_valid() {
            return Err(ConfigError::invalid("ghosts", "anchor_height range must be ordered"));
        }
        if !(0.0..=1.0).contains(&self.visual_opacity) {
            return Err(ConfigError::invalid("ghosts", "visual_opacity must be within 0..=1"));
        }
        Ok(())
    }
}

/// Ambient light parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientLightConfig {
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
}

/// Directional light parameters; the light shines toward the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLightConfig {
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
    /// Shadow casting
    pub casts_shadow: bool,
    /// Light position
    pub position: Vec3,
}

/// Point light parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLightConfig {
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
    /// Light range
    pub range: f32,
    /// Shadow casting
    pub casts_shadow: bool,
    /// Light position
    pub position: Vec3,
}

/// # Lighting Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient fill
    pub ambient: AmbientLightConfig,
    /// Moonlight
    pub moon: DirectionalLightConfig,
    /// Lamp over the tower door
    pub door: PointLightConfig,
}

impl Default for LightingConfig {
    fn default() -> Self {
        let moon_color = Color::from_rgb8(0xb9, 0xd5, 0xff);
        Self {
            ambient: AmbientLightConfig { color: moon_color, intensity: 0.2 },
            moon: DirectionalLightConfig {
                color: moon_color,
                intensity: 0.5,
                casts_shadow: true,
                position: Vec3::new(4.0, 5.0, -2.0),
            },
            door: PointLightConfig {
                color: Color::from_rgb8(0xff, 0xcc, 0x00),
                intensity: 2.0,
                range: 10.0,
                casts_shadow: true,
                position: Vec3::new(0.0, 3.0, 3.0),
            },
        }
    }
}

impl LightingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.moon.position.norm_squared() == 0.0 {
            return Err(ConfigError::invalid("lighting", "moon position must differ from the origin"));
        }
        let intensities = [self.ambient.intensity, self.moon.intensity, self.door.intensity];
        if intensities.iter().any(|i| !(i.is_finite() && *i >= 0.0)) {
            return Err(ConfigError::invalid("lighting", "intensities must be non-negative"));
        }
        Ok(())
    }
}

/// # Fog Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    /// Fog and clear color
    pub color: Color,
    /// Distance where fog starts
    pub near: f32,
    /// Distance where fog is opaque
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x08, 0x2f, 0x2b),
            near: 10.0,
            far: 50.0,
        }
    }
}

impl FogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.near >= 0.0 && self.near < self.far) {
            return Err(ConfigError::invalid("fog", "expected 0 <= near < far"));
        }
        Ok(())
    }
}

/// # Camera Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
    /// Camera position
    pub position: Vec3,
    /// Orbit centre
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            viewport_width: 1280,
            viewport_height: 720,
            position: Vec3::new(8.0, 8.0, 15.0),
            target: Vec3::zeros(),
        }
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::invalid("camera", "fov_degrees must be within (0, 180)"));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::invalid("camera", "expected 0 < near < far"));
        }
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::invalid("camera", "viewport must be non-empty"));
        }
        if self.position == self.target {
            return Err(ConfigError::invalid("camera", "position and target must differ"));
        }
        Ok(())
    }
}

/// # Complete Scene Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HauntedSceneConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Central tower
    pub tower: TowerConfig,
    /// Tombstone scatter
    pub tombstones: TombstoneConfig,
    /// Bush scatter
    pub bushes: BushConfig,
    /// Ghost lights
    pub ghosts: GhostConfig,
    /// Static lights
    pub lighting: LightingConfig,
    /// Distance fog
    pub fog: FogConfig,
    /// Viewing camera
    pub camera: CameraConfig,
}

impl Config for HauntedSceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.tower.validate()?;
        self.tombstones.validate()?;
        self.bushes.validate()?;
        self.ghosts.validate()?;
        self.lighting.validate()?;
        self.fog.validate()?;
        self.camera.validate()?;
        Ok(())
    }
}

/// Field-by-field merging of nested tables
///
/// A nested table such as `[bushes.annulus]` may name only some of its keys;
/// the rest keep the owning section's defaults, not the type's.
mod partial {
    use super::*;

    fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
        f32::deserialize(deserializer).map(Some)
    }

    #[derive(Deserialize)]
    struct AnnulusPatch {
        #[serde(default, deserialize_with = "present")]
        inner_radius: Option<f32>,
        #[serde(default, deserialize_with = "present")]
        outer_radius: Option<f32>,
        #[serde(default, deserialize_with = "present")]
        sweep: Option<f32>,
    }

    #[derive(Deserialize)]
    struct RangePatch {
        #[serde(default, deserialize_with = "present")]
        min: Option<f32>,
        #[serde(default, deserialize_with = "present")]
        max: Option<f32>,
    }

    fn annulus<'de, D: Deserializer<'de>>(base: AnnulusSpec, deserializer: D) -> Result<AnnulusSpec, D::Error> {
        let patch = AnnulusPatch::deserialize(deserializer)?;
        Ok(AnnulusSpec {
            inner_radius: patch.inner_radius.unwrap_or(base.inner_radius),
            outer_radius: patch.outer_radius.unwrap_or(base.outer_radius),
            sweep: patch.sweep.unwrap_or(base.sweep),
        })
    }

    fn range<'de, D: Deserializer<'de>>(base: SampleRange, deserializer: D) -> Result<SampleRange, D::Error> {
        let patch = RangePatch::deserialize(deserializer)?;
        Ok(SampleRange::new(patch.min.unwrap_or(base.min), patch.max.unwrap_or(base.max)))
    }

    pub(super) fn tombstone_annulus<'de, D: Deserializer<'de>>(d: D) -> Result<AnnulusSpec, D::Error> {
        annulus(TOMBSTONE_ANNULUS, d)
    }

    pub(super) fn bush_annulus<'de, D: Deserializer<'de>>(d: D) -> Result<AnnulusSpec, D::Error> {
        annulus(BUSH_ANNULUS, d)
    }

    pub(super) fn tombstone_scale<'de, D: Deserializer<'de>>(d: D) -> Result<SampleRange, D::Error> {
        range(TOMBSTONE_SCALE, d)
    }

    pub(super) fn ghost_speed<'de, D: Deserializer<'de>>(d: D) -> Result<SampleRange, D::Error> {
        range(GHOST_SPEED, d)
    }

    pub(super) fn ghost_anchor_radius<'de, D: Deserializer<'de>>(d: D) -> Result<SampleRange, D::Error> {
        range(GHOST_ANCHOR_RADIUS, d)
    }

    pub(super) fn ghost_anchor_height<'de, D: Deserializer<'de>>(d: D) -> Result<SampleRange, D::Error> {
        range(GHOST_ANCHOR_HEIGHT, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_defaults_are_valid() {
        assert!(HauntedSceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = HauntedSceneConfig::default();
        config.engine = config.engine.with_seed(42).with_max_frames(300);
        let text = config.to_string_as(ConfigFormat::Toml).unwrap();
        let parsed = HauntedSceneConfig::from_str_as(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = HauntedSceneConfig::default();
        let text = config.to_string_as(ConfigFormat::Ron).unwrap();
        let parsed = HauntedSceneConfig::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r##"
            [tombstones]
            count = 12
            color = "#ffffff"

            [tombstones.annulus]
            inner_radius = 4.0
            outer_radius = 9.0
        "##;
        let config = HauntedSceneConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.tombstones.count, 12);
        assert_eq!(config.tombstones.color, Color::WHITE);
        assert_eq!(config.tombstones.annulus, AnnulusSpec::new(4.0, 9.0));
        assert_eq!(config.bushes, BushConfig::default());
    }

    #[test]
    fn test_partial_nested_tables_keep_section_defaults() {
        let text = r#"
            [bushes.annulus]
            outer_radius = 12.0

            [tombstones.annulus]
            inner_radius = 6.0

            [ghosts.speed]
            max = 1.0
        "#;
        let config = HauntedSceneConfig::from_str_as(text, ConfigFormat::Toml).unwrap();

        assert_eq!(config.bushes.annulus.inner_radius, 0.0);
        assert_eq!(config.bushes.annulus.outer_radius, 12.0);
        assert_eq!(config.bushes.annulus.sweep, PI * 3.0);

        assert_eq!(config.tombstones.annulus, AnnulusSpec::new(6.0, 23.0));
        assert_eq!(config.ghosts.speed, SampleRange::new(0.005, 1.0));
        assert_eq!(config.ghosts.anchor_radius, GhostConfig::default().anchor_radius);
    }

    #[test]
    fn test_partial_ron_keeps_bush_sweep() {
        let text = "(bushes: (annulus: (inner_radius: 1.0, outer_radius: 10.0)))";
        let config = HauntedSceneConfig::from_str_as(text, ConfigFormat::Ron).unwrap();
        assert_eq!(config.bushes.annulus, AnnulusSpec::new(1.0, 10.0).with_sweep(PI * 3.0));
    }

    #[test]
    fn test_invalid_sections_are_rejected() {
        let text = r#"
            [tombstones.annulus]
            inner_radius = 23.0
            outer_radius = 8.0
        "#;
        let err = HauntedSceneConfig::from_str_as(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { section: "tombstones", .. }));

        let mut config = HauntedSceneConfig::default();
        config.fog.near = 60.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { section: "fog", .. })));

        let mut config = HauntedSceneConfig::default();
        config.ghosts.speed = SampleRange::new(0.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let text = r#"
            [fog]
            color = "teal"
        "#;
        let err = HauntedSceneConfig::from_str_as(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
