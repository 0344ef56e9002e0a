// Ambient audio policy: mobile detection, autoplay outcome and fade curve.

use super::constants::{AUDIO_FADE_SEC, AUDIO_START_DELAY_MS, AUDIO_TARGET_VOLUME};
use super::tween::{progress, Ease};

/// Result of an autoplay attempt. `Blocked` is an expected outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Blocked,
}

impl PlayOutcome {
    #[inline]
    pub fn should_fade_in(self) -> bool {
        matches!(self, PlayOutcome::Started)
    }
}

/// Case-insensitive `Mobi|Android` match on the user agent.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ua.contains("mobi") || ua.contains("android")
}

/// Milliseconds still to wait before the autoplay attempt, given the time
/// already spent since page load.
pub fn autoplay_delay_ms(since_load_sec: f32) -> i32 {
    let spent = (since_load_sec.max(0.0) * 1000.0).round() as i32;
    (AUDIO_START_DELAY_MS - spent).max(0)
}

/// Volume `elapsed` seconds into the fade-in, starting from silence.
pub fn fade_volume(elapsed: f32) -> f32 {
    let p = progress(elapsed, 0.0, AUDIO_FADE_SEC);
    AUDIO_TARGET_VOLUME * Ease::Power1Out.apply(p)
}

#[inline]
pub fn fade_finished(elapsed: f32) -> bool {
    elapsed >= AUDIO_FADE_SEC
}
