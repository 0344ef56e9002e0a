// Perspective camera with pointer-driven parallax easing.

use super::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera that always looks at the scene origin.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Move one easing step toward the parallax target for `pointer`.
    ///
    /// Z is left untouched and the camera is re-aimed at the origin.
    pub fn ease_toward(&mut self, pointer: Vec2) {
        let goal_x = pointer.x * CAMERA_PARALLAX_X;
        let goal_y = pointer.y * CAMERA_PARALLAX_Y;
        self.eye.x += (goal_x - self.eye.x) * CAMERA_EASE;
        self.eye.y += (goal_y - self.eye.y) * CAMERA_EASE;
        self.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Distance of `world` in front of the camera along its view axis.
    pub fn view_depth(&self, world: Vec3) -> f32 {
        -self.view_matrix().transform_point3(world).z
    }

    /// World-space right and up axes of the view, used for billboarding.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        (view.row(0).truncate(), view.row(1).truncate())
    }
}
