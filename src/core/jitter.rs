// Injectable randomness for procedural generation.
//
// Generators take a `Jitter` instead of reaching for a global RNG, so the
// page can use `rand::thread_rng()` while tests pin every sample.

use rand::Rng;

/// Source of uniform samples in a half-open range.
pub trait Jitter {
    /// Sample uniformly from `[lo, hi)`. Degenerate ranges return `lo`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;

    /// Sample uniformly from `[-half_width, half_width)`.
    fn symmetric(&mut self, half_width: f32) -> f32 {
        self.uniform(-half_width, half_width)
    }
}

/// Adapter for any `rand` generator.
pub struct RngJitter<R: Rng>(pub R);

impl<R: Rng> Jitter for RngJitter<R> {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.0.gen_range(lo..hi)
        } else {
            lo
        }
    }
}

/// Always returns the midpoint, i.e. zero for symmetric ranges.
#[derive(Clone, Copy, Debug, Default)]
pub struct Centered;

impl Jitter for Centered {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        (lo + hi) * 0.5
    }
}
