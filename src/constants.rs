// Page wiring and render target settings for the web frontend.
//
// The DOM identifiers below are the contract with the landing page markup;
// scene tuning lives in `core::constants`.

// Required rendering surface
pub const CANVAS_ID: &str = "scene";

// Ambient audio element and its optional user-gesture control
pub const AUDIO_ID: &str = "ambient";
pub const AUDIO_FALLBACK_ID: &str = "audioFallback";

// Scroll reveal
pub const SECTION_SELECTOR: &str = "main .section";
pub const REVEAL_CLASS: &str = "in";

// Canvas resolution
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Antialiasing
pub const MSAA_SAMPLES: u32 = 4;
