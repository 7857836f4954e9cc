//! Primitive shapes and the static tower meshes

use crate::core::config::TowerConfig;
use crate::foundation::color::Color;
use crate::foundation::math::{constants::HALF_PI, Transform, Vec3};

/// Geometric primitive the renderer tessellates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Flat rectangle in the local XY plane
    Plane {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
    },
    /// Axis-aligned box centred on the origin
    Box {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
        /// Extent along Z
        depth: f32,
    },
    /// Upright cylinder centred on the origin
    Cylinder {
        /// Radius of both caps
        radius: f32,
        /// Extent along Y
        height: f32,
    },
    /// Upright cone centred on the origin, apex up
    Cone {
        /// Base radius
        radius: f32,
        /// Extent along Y
        height: f32,
    },
    /// Sphere centred on the origin
    Sphere {
        /// Radius
        radius: f32,
    },
}

impl Primitive {
    /// Unscaled tombstone slab
    pub const TOMBSTONE: Self = Self::Box { width: 1.0, height: 2.0, depth: 0.2 };

    /// Box framing the tower door
    pub const DOOR_FRAME: Self = Self::Box { width: 2.0, height: 2.0, depth: DOOR_FRAME_DEPTH };
}

/// Door frame depth; its front face sits flush with the wall
pub const DOOR_FRAME_DEPTH: f32 = 1.0;

/// A mesh with a flat-colored material
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    /// Debug name
    pub name: &'static str,
    /// Shape
    pub primitive: Primitive,
    /// Material base color
    pub color: Color,
    /// World transform
    pub transform: Transform,
    /// Rendered into shadow maps
    pub casts_shadow: bool,
    /// Shadows are drawn onto it
    pub receives_shadow: bool,
}

impl MeshNode {
    /// Mesh at the origin with no shadow flags
    pub fn new(name: &'static str, primitive: Primitive, color: Color) -> Self {
        Self {
            name,
            primitive,
            color,
            transform: Transform::identity(),
            casts_shadow: false,
            receives_shadow: false,
        }
    }

    /// Builder pattern: Set the transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder pattern: Enable shadow casting
    pub fn casting_shadow(mut self) -> Self {
        self.casts_shadow = true;
        self
    }

    /// Builder pattern: Enable shadow receiving
    pub fn receiving_shadow(mut self) -> Self {
        self.receives_shadow = true;
        self
    }
}

/// Ground, walls, roof and door
///
/// The walls stand on the ground; the roof sits on top of them. The door
/// plane is pushed just past the frame so the two never z-fight.
pub fn tower_meshes(config: &TowerConfig) -> Vec<MeshNode> {
    let wall_top = config.wall_height;

    let floor = MeshNode::new(
        "floor",
        Primitive::Plane { width: config.floor_size, height: config.floor_size },
        config.floor_color,
    )
    .with_transform(Transform::identity().with_rotation_euler(-HALF_PI, 0.0, 0.0))
    .receiving_shadow();

    let walls = MeshNode::new(
        "walls",
        Primitive::Cylinder { radius: config.wall_radius, height: config.wall_height },
        config.wall_color,
    )
    .with_transform(Transform::from_position(Vec3::new(0.0, wall_top * 0.5, 0.0)))
    .casting_shadow();

    let roof = MeshNode::new(
        "roof",
        Primitive::Cone { radius: config.roof_radius, height: config.roof_height },
        config.roof_color,
    )
    .with_transform(Transform::from_position(Vec3::new(0.0, wall_top + config.roof_height * 0.5, 0.0)));

    let door_frame = MeshNode::new("door_frame", Primitive::DOOR_FRAME, config.door_frame_color).with_transform(
        Transform::from_position(Vec3::new(0.0, 1.0, config.wall_radius - DOOR_FRAME_DEPTH * 0.5)),
    );

    let door = MeshNode::new("door", Primitive::Plane { width: 1.5, height: 2.0 }, config.door_color)
        .with_transform(Transform::from_position(Vec3::new(0.0, 0.8, config.wall_radius + 0.001)))
        .casting_shadow();

    vec![floor, walls, roof, door_frame, door]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_tower_layout() {
        let meshes = tower_meshes(&TowerConfig::default());
        let names: Vec<&str> = meshes.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["floor", "walls", "roof", "door_frame", "door"]);

        let by_name = |name: &str| meshes.iter().find(|m| m.name == name).unwrap();
        assert!(by_name("floor").receives_shadow);
        assert!(by_name("walls").casts_shadow);
        assert!(by_name("door").casts_shadow);
        assert!(!by_name("roof").casts_shadow);

        assert_relative_eq!(by_name("walls").transform.position.y, 5.0);
        assert_relative_eq!(by_name("roof").transform.position.y, 11.0);
        assert_relative_eq!(by_name("door_frame").transform.position, Vec3::new(0.0, 1.0, 1.5));
        assert_relative_eq!(by_name("door").transform.position, Vec3::new(0.0, 0.8, 2.001), epsilon = 1e-6);
    }

    #[test]
    fn test_door_frame_flush_with_wide_wall() {
        let config = TowerConfig { wall_radius: 3.5, ..TowerConfig::default() };
        let meshes = tower_meshes(&config);
        let frame = meshes.iter().find(|m| m.name == "door_frame").unwrap();

        let Primitive::Box { depth, .. } = frame.primitive else {
            panic!("door frame is not a box: {:?}", frame.primitive);
        };
        assert_relative_eq!(frame.transform.position.z + depth * 0.5, config.wall_radius);
        assert_relative_eq!(frame.transform.position.z - depth * 0.5, config.wall_radius - DOOR_FRAME_DEPTH);
    }

    #[test]
    fn test_floor_faces_up() {
        let floor = tower_meshes(&TowerConfig::default()).remove(0);
        let normal = floor.transform.rotation * Vec3::z();
        assert_relative_eq!(normal, Vec3::y(), epsilon = 1e-6);
    }
}
