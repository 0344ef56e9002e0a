/// Easing curves used by the page tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic ease-out; the default for page tweens.
    Power1Out,
    /// Quartic ease-out.
    Power3Out,
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[inline]
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Power1Out => 1.0 - (1.0 - p).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - p).powi(4),
        }
    }
}

/// Linear progress of a tween that starts at `delay` and runs `duration`.
#[inline]
pub fn progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}
