// Static description of the hero scene: fog, lights and backdrop meshes.
//
// Built once at bootstrap and turned into GPU resources by the renderer.
// Colors are given as sRGB hex and stored linear.

use super::constants::*;
use super::field::SceneRotations;
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` in sRGB to linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

impl Fog {
    /// Blend weight toward the fog color at view-space `depth`.
    #[inline]
    pub fn factor(&self, depth: f32) -> f32 {
        let k = self.density * depth;
        (1.0 - (-k * k).exp()).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Cutoff distance; zero means unbounded.
    pub distance: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct BasicMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct SceneDescription {
    pub fog: Fog,
    pub key_light: DirectionalLight,
    pub fill_light: PointLight,
    pub ring: BasicMaterial,
    pub streak: BasicMaterial,
    pub particle_size: f32,
}

pub fn hero_scene() -> SceneDescription {
    SceneDescription {
        fog: Fog {
            color: hex_to_linear(FOG_COLOR),
            density: FOG_DENSITY,
        },
        key_light: DirectionalLight {
            direction: Vec3::from_array(KEY_LIGHT_POSITION).normalize(),
            color: hex_to_linear(KEY_LIGHT_COLOR),
            intensity: KEY_LIGHT_INTENSITY,
        },
        fill_light: PointLight {
            position: Vec3::from_array(FILL_LIGHT_POSITION),
            color: hex_to_linear(FILL_LIGHT_COLOR),
            intensity: FILL_LIGHT_INTENSITY,
            distance: FILL_LIGHT_DISTANCE,
        },
        ring: BasicMaterial {
            color: hex_to_linear(RING_COLOR),
            opacity: RING_OPACITY,
        },
        streak: BasicMaterial {
            color: hex_to_linear(STREAK_COLOR),
            opacity: STREAK_OPACITY,
        },
        particle_size: PARTICLE_SIZE,
    }
}

// Object transforms compose translation * Rx * Ry * Rz (XYZ Euler order).

pub fn field_model(rot: &SceneRotations) -> Mat4 {
    Mat4::from_rotation_y(rot.field_y)
}

pub fn ring_model(rot: &SceneRotations) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, RING_Y, 0.0))
        * Mat4::from_rotation_x(-FRAC_PI_2)
        * Mat4::from_rotation_z(rot.ring_z)
}

pub fn streak_model(rot: &SceneRotations) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, STREAK_Y, STREAK_Z))
        * Mat4::from_rotation_x(STREAK_TILT_X)
        * Mat4::from_rotation_y(rot.streak_y)
}
