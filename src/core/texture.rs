// Procedural glow sprite used by the particle material.

use super::constants::*;
use super::jitter::Jitter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub rgb: [u8; 3],
    pub alpha: f32,
}

/// Warm-white core fading through amber to a transparent edge.
pub const GLOW_STOPS: [GradientStop; 4] = [
    GradientStop {
        offset: 0.0,
        rgb: [255, 245, 200],
        alpha: 1.0,
    },
    GradientStop {
        offset: 0.2,
        rgb: [255, 215, 120],
        alpha: 0.95,
    },
    GradientStop {
        offset: 0.45,
        rgb: [200, 140, 60],
        alpha: 0.6,
    },
    GradientStop {
        offset: 1.0,
        rgb: [0, 0, 0],
        alpha: 0.0,
    },
];

/// Square RGBA8 image with premultiplied alpha, rows top to bottom.
///
/// Bytes are meant to be sampled as plain unorm data, with no sRGB decode.
#[derive(Clone, Debug)]
pub struct GlowImage {
    pub size: u32,
    pub pixels: Vec<u8>,
}

impl GlowImage {
    /// Premultiplied RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.size * 4
    }
}

/// Unpremultiplied color of the gradient at normalized distance `d`.
pub fn sample_gradient(stops: &[GradientStop], d: f32) -> [f32; 4] {
    let to_rgba = |s: &GradientStop| {
        [
            s.rgb[0] as f32 / 255.0,
            s.rgb[1] as f32 / 255.0,
            s.rgb[2] as f32 / 255.0,
            s.alpha,
        ]
    };
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return [0.0; 4],
    };
    if d <= first.offset {
        return to_rgba(first);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if d <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            let k = (d - a.offset) / span;
            let ca = to_rgba(a);
            let cb = to_rgba(b);
            return [
                ca[0] + (cb[0] - ca[0]) * k,
                ca[1] + (cb[1] - ca[1]) * k,
                ca[2] + (cb[2] - ca[2]) * k,
                ca[3] + (cb[3] - ca[3]) * k,
            ];
        }
    }
    to_rgba(last)
}

/// Rasterize the glow sprite at `size × size`.
///
/// The radial gradient is sampled at integer pixel coordinates around
/// `(size/2, size/2)`, then `SPECKLE_COUNT` white flecks are composited on
/// top to break up banding. Output is premultiplied for additive blending.
pub fn glow_texture(size: u32, jitter: &mut impl Jitter) -> GlowImage {
    let size = size.max(1);
    let center = size as f32 / 2.0;
    let radius = (size as f32 / 2.0).max(f32::EPSILON);

    let mut rgba: Vec<[f32; 4]> = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let d = (dx * dx + dy * dy).sqrt() / radius;
            rgba.push(sample_gradient(&GLOW_STOPS, d));
        }
    }

    let spread = radius * SPECKLE_SPREAD * 0.5;
    for _ in 0..SPECKLE_COUNT {
        let opacity = jitter.uniform(SPECKLE_OPACITY_MIN, SPECKLE_OPACITY_MAX);
        let sx = center + jitter.symmetric(spread);
        let sy = center + jitter.symmetric(spread);
        let w = jitter.uniform(SPECKLE_SIZE_MIN, SPECKLE_SIZE_MAX).round() as i64;
        let h = jitter.uniform(SPECKLE_SIZE_MIN, SPECKLE_SIZE_MAX).round() as i64;
        let x0 = sx.floor() as i64;
        let y0 = sy.floor() as i64;
        for py in y0.max(0)..(y0 + h).min(size as i64) {
            for px in x0.max(0)..(x0 + w).min(size as i64) {
                let dst = &mut rgba[(py as u32 * size + px as u32) as usize];
                *dst = over_white(*dst, opacity);
            }
        }
    }

    let mut pixels = Vec::with_capacity(rgba.len() * 4);
    for [r, g, b, a] in rgba {
        let a = a.clamp(0.0, 1.0);
        pixels.push(quantize(r * a));
        pixels.push(quantize(g * a));
        pixels.push(quantize(b * a));
        pixels.push(quantize(a));
    }
    GlowImage { size, pixels }
}

// Source-over of white at `alpha` onto an unpremultiplied color.
fn over_white(dst: [f32; 4], alpha: f32) -> [f32; 4] {
    let keep = dst[3] * (1.0 - alpha);
    let out_a = alpha + keep;
    if out_a <= 0.0 {
        return [0.0; 4];
    }
    let mix = |c: f32| (alpha + c * keep) / out_a;
    [mix(dst[0]), mix(dst[1]), mix(dst[2]), out_a]
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
