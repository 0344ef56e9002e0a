// Fire-once hero entrance tweens.
//
// Each step animates its elements *from* an offset, transparent state to
// their natural layout. Sampling is a pure function of the time since load.

use super::tween::{progress, Ease};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceStep {
    pub selector: &'static str,
    /// Starting downward offset in CSS pixels.
    pub from_y: f32,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    /// Extra delay per matched element, in document order.
    pub stagger: f32,
}

/// Visual state of one element at a point in the tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenState {
    pub opacity: f32,
    pub translate_y: f32,
}

impl TweenState {
    pub const SETTLED: TweenState = TweenState {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

pub const ENTRANCE_STEPS: [EntranceStep; 4] = [
    EntranceStep {
        selector: ".hero-content .eyebrow",
        from_y: 8.0,
        duration: 0.9,
        delay: 0.3,
        ease: Ease::Power1Out,
        stagger: 0.0,
    },
    EntranceStep {
        selector: ".hero-content .hero-title",
        from_y: 18.0,
        duration: 1.2,
        delay: 0.4,
        ease: Ease::Power3Out,
        stagger: 0.0,
    },
    EntranceStep {
        selector: ".hero-content .hero-sub",
        from_y: 10.0,
        duration: 1.1,
        delay: 0.6,
        ease: Ease::Power1Out,
        stagger: 0.0,
    },
    EntranceStep {
        selector: ".hero-actions .btn",
        from_y: 10.0,
        duration: 0.9,
        delay: 0.8,
        ease: Ease::Power1Out,
        stagger: 0.08,
    },
];

impl EntranceStep {
    #[inline]
    pub fn start_time(&self, element_index: usize) -> f32 {
        self.delay + self.stagger * element_index as f32
    }

    /// Time at which the last of `element_count` elements settles.
    pub fn end_time(&self, element_count: usize) -> f32 {
        self.start_time(element_count.saturating_sub(1)) + self.duration
    }

    pub fn sample(&self, elapsed: f32, element_index: usize) -> TweenState {
        let p = progress(elapsed, self.start_time(element_index), self.duration);
        let e = self.ease.apply(p);
        TweenState {
            opacity: e,
            translate_y: self.from_y * (1.0 - e),
        }
    }
}

/// Tracks whether the one-shot entrance has finished.
#[derive(Clone, Debug)]
pub struct Choreography {
    steps: Vec<(EntranceStep, usize)>,
    finished: bool,
}

impl Choreography {
    /// `element_counts[k]` is how many elements matched `ENTRANCE_STEPS[k]`.
    pub fn new(element_counts: &[usize]) -> Self {
        let steps = ENTRANCE_STEPS
            .iter()
            .copied()
            .zip(element_counts.iter().copied())
            .collect();
        Self {
            steps,
            finished: false,
        }
    }

    /// Time at which every step has settled.
    pub fn total_duration(&self) -> f32 {
        self.steps
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(step, count)| step.end_time(*count))
            .fold(0.0, f32::max)
    }

    /// Mark finished once `elapsed` passes the last settle time. Returns
    /// `true` exactly once, on the call that completes the run.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        if self.finished {
            return false;
        }
        if elapsed >= self.total_duration() {
            self.finished = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
