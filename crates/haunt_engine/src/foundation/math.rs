//! Math utilities and types
//!
//! Provides fundamental math types for the scene. Y is up; the ground plane
//! is spanned by X and Z.

pub use nalgebra::{
    Vector2, Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type (ground-plane coordinates are stored as `(x, z)`)
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation from Euler angles (radians, intrinsic XYZ)
    ///
    /// The z rotation applies first in the object's own frame, then y, then x.
    pub fn with_rotation_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Quat::from_axis_angle(&Vec3::x_axis(), x)
            * Quat::from_axis_angle(&Vec3::y_axis(), y)
            * Quat::from_axis_angle(&Vec3::z_axis(), z);
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Project a world-space point onto the ground plane
    pub fn ground(point: &Vec3) -> Vec2 {
        Vec2::new(point.x, point.z)
    }

    /// Distance between two points measured on the ground plane (Y ignored)
    pub fn ground_distance(a: &Vec3, b: &Vec3) -> f32 {
        (ground(a) - ground(b)).magnitude()
    }

    /// Point on a circle of `radius` around the origin, at height `y`
    ///
    /// Angle 0 points along +X and grows toward +Z.
    pub fn polar_to_ground(angle: f32, radius: f32, y: f32) -> Vec3 {
        Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
    }
}
