//! # Perspective Camera
//!
//! Right-handed, Y-up view space. Matrices are computed on demand from the
//! camera's position, target and projection parameters.

use nalgebra::Point3;

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Vec3};

/// 3D camera for perspective projection
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Build from configuration, sized to the configured viewport
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::perspective(config.position, config.fov_degrees, 1.0, config.near, config.far);
        camera.target = config.target;
        camera.set_viewport(config.viewport_width, config.viewport_height);
        camera
    }

    /// Match the aspect ratio to a resized viewport
    ///
    /// A zero-sized viewport (minimized window) leaves the aspect unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring empty viewport {}x{}", width, height);
            return;
        }
        self.set_aspect_ratio(width as f32 / height as f32);
    }

    /// Update camera aspect ratio
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        // Only log significant changes to keep resize storms quiet
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(self.position), &Point3::from(self.target), &self.up)
    }

    /// Perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined view-projection: `P × V`
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
