// Host-side tests for the scene description, object transforms and backdrop meshes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod jitter {
    include!("../src/core/jitter.rs");
}
mod field {
    include!("../src/core/field.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::CameraRig;
use field::{rotations_at, SceneRotations};
use geometry::*;
use glam::{Vec3, Vec4};
use scene::*;

const REST: SceneRotations = SceneRotations {
    field_y: 0.0,
    ring_z: 0.0,
    streak_y: 0.0,
};

fn near(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

fn triangle_area(t: &[[f32; 3]]) -> f32 {
    let a = Vec3::from_array(t[0]);
    let b = Vec3::from_array(t[1]);
    let c = Vec3::from_array(t[2]);
    (b - a).cross(c - a).length() * 0.5
}

#[test]
fn hex_colors_convert_to_linear() {
    assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    for c in hex_to_linear(0xffffff) {
        assert!((c - 1.0).abs() < 1e-6);
    }
    let fog = hex_to_linear(0x050007);
    assert!((fog[0] - 5.0 / 255.0 / 12.92).abs() < 1e-7);
    assert_eq!(fog[1], 0.0);
    assert!(fog[2] > fog[0]);
    // Mid grey lands near 0.214 in linear light.
    assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
}

#[test]
fn hero_scene_carries_lights_and_materials() {
    let s = hero_scene();
    assert_eq!(s.fog.density, 0.02);
    assert!(near(
        s.key_light.direction,
        Vec3::new(10.0, 8.0, 10.0).normalize()
    ));
    assert_eq!(s.key_light.intensity, 0.6);
    assert_eq!(s.fill_light.position, Vec3::new(-6.0, -4.0, 6.0));
    assert_eq!(s.fill_light.distance, 30.0);
    assert_eq!(s.ring.opacity, 0.05);
    assert_eq!(s.streak.opacity, 0.03);
    assert_eq!(s.particle_size, 0.08);
}

#[test]
fn ring_lies_flat_below_the_field() {
    let m = ring_model(&REST);
    let normal = (m * Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
    assert!(near(normal, Vec3::Y));
    assert!(near(m.transform_point3(Vec3::ZERO), Vec3::new(0.0, -0.4, 0.0)));
    assert!(near(
        m.transform_point3(Vec3::new(3.0, 0.0, 0.0)),
        Vec3::new(3.0, -0.4, 0.0)
    ));
    assert!(near(
        m.transform_point3(Vec3::new(0.0, 3.0, 0.0)),
        Vec3::new(0.0, -0.4, -3.0)
    ));
}

#[test]
fn ring_sway_spins_within_its_plane() {
    let rot = rotations_at(13.0);
    let m = ring_model(&rot);
    let p = m.transform_point3(Vec3::new(3.25, 0.0, 0.0));
    assert!((p.y + 0.4).abs() < 1e-5);
    assert!((Vec3::new(p.x, 0.0, p.z).length() - 3.25).abs() < 1e-5);
}

#[test]
fn streak_sits_behind_and_above() {
    let m = streak_model(&REST);
    assert!(near(
        m.transform_point3(Vec3::ZERO),
        Vec3::new(0.0, 1.0, -1.4)
    ));
    // Tilted about X, so its long axis stays horizontal.
    let along = m.transform_vector3(Vec3::X);
    assert!(near(along, Vec3::X));
    let normal = m.transform_vector3(Vec3::Z);
    assert!((normal.y - 0.35f32.sin()).abs() < 1e-5);
}

#[test]
fn field_spins_about_vertical_axis() {
    let m = field_model(&SceneRotations {
        field_y: std::f32::consts::FRAC_PI_2,
        ..REST
    });
    assert!(near(m.transform_point3(Vec3::X), Vec3::new(0.0, 0.0, -1.0)));
    assert!(near(m.transform_point3(Vec3::Y), Vec3::Y));
}

#[test]
fn ring_mesh_is_an_annulus() {
    let tris = ring_triangles(3.0, 3.5, 64);
    assert_eq!(tris.len(), 64 * 6);
    for v in &tris {
        let r = Vec3::from_array(*v).length();
        assert!((3.0 - 1e-4..=3.5 + 1e-4).contains(&r), "radius {r}");
        assert_eq!(v[2], 0.0);
    }
    let area: f32 = tris.chunks_exact(3).map(triangle_area).sum();
    let exact = std::f32::consts::PI * (3.5 * 3.5 - 3.0 * 3.0);
    assert!((area - exact).abs() / exact < 0.01, "area {area}");
}

#[test]
fn ring_mesh_has_a_segment_floor() {
    assert_eq!(ring_triangles(1.0, 2.0, 0).len(), 18);
}

#[test]
fn plane_mesh_spans_its_extent() {
    let tris = plane_triangles(8.0, 0.35);
    assert_eq!(tris.len(), 6);
    let max_x = tris.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
    let min_y = tris.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
    assert_eq!(max_x, 4.0);
    assert_eq!(min_y, -0.175);
    let area: f32 = tris.chunks_exact(3).map(triangle_area).sum();
    assert!((area - 2.8).abs() < 1e-5);
}

#[test]
fn fog_uses_view_depth_not_distance() {
    let cam = CameraRig::new(1.0);
    let fog = hero_scene().fog;
    let center = Vec3::ZERO;
    let off_axis = Vec3::new(4.0, -3.0, 0.0);
    assert!((cam.view_depth(center) - 6.0).abs() < 1e-5);
    // Same plane as the origin, so same depth despite being farther away.
    assert!((cam.view_depth(off_axis) - 6.0).abs() < 1e-5);
    let (near_f, far_f) = (fog.factor(cam.view_depth(center)), fog.factor(cam.view_depth(off_axis)));
    assert!((near_f - far_f).abs() < 1e-6);
}

#[test]
fn fog_is_exponential_squared() {
    let fog = hero_scene().fog;
    assert_eq!(fog.factor(0.0), 0.0);
    // At depth 6 with density 0.02: 1 - exp(-0.0144)
    assert!((fog.factor(6.0) - (1.0 - (-0.0144f32).exp())).abs() < 1e-6);
    assert!(fog.factor(50.0) > fog.factor(6.0));
    assert!(fog.factor(1.0e4) <= 1.0);
}

#[test]
fn view_depth_follows_eased_camera() {
    let mut cam = CameraRig::new(1.0);
    for _ in 0..200 {
        cam.ease_toward(glam::Vec2::new(1.0, 1.0));
    }
    // Camera still aims at the origin, so the origin sits at eye distance.
    assert!((cam.view_depth(Vec3::ZERO) - cam.eye.length()).abs() < 1e-4);
}
