/// Camera and projection utilities
use std::f64::consts::PI;

use crate::vector::{Vec2, Vec3};

/// Field of view used by [`Camera::project`] (radians)
pub const DEFAULT_FOV: f64 = PI / 3.0;

/// Where a fresh camera sits: on the +X axis looking back at the origin
pub const DEFAULT_EYE: Vec3 = Vec3::new(300.0, 0.0, 0.0);

/// Camera looking down the -X axis.
///
/// Only `eye` changes at runtime; the view direction is fixed, so moving the
/// camera means translating it along X.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    fov: f64,
    normal: Vec3,
    screen: Vec2,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: DEFAULT_EYE,
            fov: DEFAULT_FOV,
            normal: Vec3::new(-1.0, 0.0, 0.0),
            screen: Vec2::new(width as f64, height as f64),
        }
    }

    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// View direction, which doubles as the light direction for shading
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Project a 3D point to screen space, relative to the viewport center.
    ///
    /// World Y maps to screen X and world Z to inverted screen Y. The divisor
    /// uses the straight-line distance to the eye rather than depth along the
    /// view axis, so this is not a true pinhole projection.
    pub fn project(&self, point: &Vec3) -> Vec2 {
        let delta = point - self.eye;
        let denom = self.fov.tan() * delta.norm();
        Vec2::new(
            self.screen.y * delta.y / denom,
            self.screen.x * -delta.z / denom,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
