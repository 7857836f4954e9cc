//! Scene lights and atmosphere

use crate::core::config::{FogConfig, LightingConfig};
use crate::foundation::color::Color;
use crate::foundation::math::Vec3;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Uniform fill light with no position
    Ambient,
    /// Directional light (like moonlight)
    Directional,
    /// Point light (like a lantern)
    Point,
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light position (point lights, and the origin of directional shadows)
    pub position: Vec3,
    /// Light direction (for directional lights)
    pub direction: Vec3,
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
    /// Light range (for point lights; 0 means unlimited)
    pub range: f32,
    /// Whether the light renders a shadow map
    pub casts_shadow: bool,
}

impl Light {
    /// Create an ambient light
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self {
            light_type: LightType::Ambient,
            position: Vec3::zeros(),
            direction: Vec3::zeros(),
            color,
            intensity,
            range: 0.0,
            casts_shadow: false,
        }
    }

    /// Create a directional light placed at `position` and shining at `target`
    pub fn directional(position: Vec3, target: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            position,
            direction: (target - position).normalize(),
            color,
            intensity,
            range: 0.0,
            casts_shadow: false,
        }
    }

    /// Create a point light
    pub fn point(position: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            direction: Vec3::zeros(),
            color,
            intensity,
            range,
            casts_shadow: false,
        }
    }

    /// Builder pattern: Enable or disable shadow casting
    pub fn with_shadows(mut self, enabled: bool) -> Self {
        self.casts_shadow = enabled;
        self
    }
}

/// Static lights of the scene (ghost lights live with their ghosts)
#[derive(Debug, Clone, Default)]
pub struct LightingEnvironment {
    /// List of lights in the scene
    pub lights: Vec<Light>,
}

impl LightingEnvironment {
    /// Create a new empty lighting environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light to the environment
    pub fn add_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Moonlit night: faint blue ambient, a shadow-casting moon, and a warm
    /// lamp over the tower door
    pub fn haunted_night(config: &LightingConfig) -> Self {
        Self::new()
            .add_light(Light::ambient(config.ambient.color, config.ambient.intensity))
            .add_light(
                Light::directional(config.moon.position, Vec3::zeros(), config.moon.color, config.moon.intensity)
                    .with_shadows(config.moon.casts_shadow),
            )
            .add_light(
                Light::point(config.door.position, config.door.color, config.door.intensity, config.door.range)
                    .with_shadows(config.door.casts_shadow),
            )
    }

    /// Lights of one type
    pub fn of_type(&self, light_type: LightType) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(move |light| light.light_type == light_type)
    }
}

/// Linear distance fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Fog color, also used as the clear color
    pub color: Color,
    /// Distance where fog starts
    pub near: f32,
    /// Distance where fog is opaque
    pub far: f32,
}

impl Fog {
    /// Build from configuration
    pub fn from_config(config: &FogConfig) -> Self {
        Self {
            color: config.color,
            near: config.near,
            far: config.far,
        }
    }

    /// Fog blend factor at `distance` (0 = clear, 1 = fully fogged)
    pub fn factor(&self, distance: f32) -> f32 {
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}
