// Flat backdrop meshes as non-indexed triangle lists in the local XY plane.

use std::f32::consts::TAU;

/// Annulus between `inner` and `outer` radii with `segments` quads.
pub fn ring_triangles(inner: f32, outer: f32, segments: u32) -> Vec<[f32; 3]> {
    let segments = segments.max(3);
    let mut out = Vec::with_capacity(segments as usize * 6);
    for s in 0..segments {
        let a0 = s as f32 / segments as f32 * TAU;
        let a1 = (s + 1) as f32 / segments as f32 * TAU;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        let i0 = [c0 * inner, s0 * inner, 0.0];
        let o0 = [c0 * outer, s0 * outer, 0.0];
        let i1 = [c1 * inner, s1 * inner, 0.0];
        let o1 = [c1 * outer, s1 * outer, 0.0];
        out.extend_from_slice(&[i0, o0, o1, i0, o1, i1]);
    }
    out
}

/// Rectangle of `width × height` centered on the origin.
pub fn plane_triangles(width: f32, height: f32) -> Vec<[f32; 3]> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let bl = [-hw, -hh, 0.0];
    let br = [hw, -hh, 0.0];
    let tr = [hw, hh, 0.0];
    let tl = [-hw, hh, 0.0];
    vec![bl, br, tr, bl, tr, tl]
}
