// Shared scene tuning constants used by the web frontend.

// Particle field layout
pub const PARTICLE_COUNT: usize = 1200;
pub const FIELD_TURNS_PI: f32 = 7.0; // angle sweep in multiples of PI (3.5 turns)
pub const FIELD_INNER_RADIUS: f32 = 0.6;
pub const FIELD_RADIUS_SPAN: f32 = 3.4;
pub const FIELD_RADIUS_EXPONENT: f32 = 0.9;
pub const FIELD_HEIGHT_SPAN: f32 = 3.4;

// Jitter half-widths applied at generation
pub const ANGLE_JITTER: f32 = 0.3;
pub const RADIUS_JITTER: f32 = 0.06;
pub const HEIGHT_JITTER: f32 = 0.25;

// Per-frame drift
pub const DRIFT_RATE: f32 = 0.45;
pub const DRIFT_BASE: f32 = 0.6;
pub const DRIFT_BUCKETS: usize = 5;
pub const DRIFT_BUCKET_STEP: f32 = 0.02;
pub const BREATH_BASE: f32 = 0.98;
pub const BREATH_AMPLITUDE: f32 = 0.004;
pub const BREATH_RATE: f32 = 0.2;
pub const BOB_RATE: f32 = 0.35;
pub const BOB_AMPLITUDE: f32 = 0.02;
pub const WOBBLE_RATE: f32 = 0.13;
pub const WOBBLE_AMPLITUDE: f32 = 0.02;

// Pointer parallax applied to particles
pub const PARALLAX_X: f32 = 0.5;
pub const PARALLAX_Y: f32 = 0.6;

// Whole-object rotations (radians per second / amplitudes)
pub const FIELD_SPIN_RATE: f32 = 0.06;
pub const RING_SWAY_RATE: f32 = 0.12;
pub const RING_SWAY_AMPLITUDE: f32 = 0.03;
pub const STREAK_SWAY_RATE: f32 = 0.1;
pub const STREAK_SWAY_AMPLITUDE: f32 = 0.06;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_PARALLAX_X: f32 = 0.9;
pub const CAMERA_PARALLAX_Y: f32 = 0.7;
pub const CAMERA_EASE: f32 = 0.06; // fraction of remaining distance per frame

// Fog (exponential squared)
pub const FOG_COLOR: u32 = 0x050007;
pub const FOG_DENSITY: f32 = 0.02;

// Lights
pub const KEY_LIGHT_COLOR: u32 = 0xffe7c2;
pub const KEY_LIGHT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 8.0, 10.0];
pub const FILL_LIGHT_COLOR: u32 = 0xb88a3a;
pub const FILL_LIGHT_INTENSITY: f32 = 0.6;
pub const FILL_LIGHT_DISTANCE: f32 = 30.0;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-6.0, -4.0, 6.0];
// Share of backdrop color modulated by the lights (rest is unlit base color)
pub const BACKDROP_LIGHT_WEIGHT: f32 = 0.15;

// Particle sprite material
pub const PARTICLE_SIZE: f32 = 0.08;

// Background ring
pub const RING_INNER: f32 = 3.0;
pub const RING_OUTER: f32 = 3.5;
pub const RING_SEGMENTS: u32 = 64;
pub const RING_COLOR: u32 = 0x3a2208;
pub const RING_OPACITY: f32 = 0.05;
pub const RING_Y: f32 = -0.4;

// Background streak
pub const STREAK_WIDTH: f32 = 8.0;
pub const STREAK_HEIGHT: f32 = 0.35;
pub const STREAK_COLOR: u32 = 0xffe6b0;
pub const STREAK_OPACITY: f32 = 0.03;
pub const STREAK_TILT_X: f32 = -0.35;
pub const STREAK_Y: f32 = 1.0;
pub const STREAK_Z: f32 = -1.4;

// Glow sprite texture
pub const GLOW_TEXTURE_SIZE: u32 = 128;
pub const SPECKLE_COUNT: usize = 12;
pub const SPECKLE_SPREAD: f32 = 0.7; // fraction of the radius speckles may cover
pub const SPECKLE_OPACITY_MIN: f32 = 0.06;
pub const SPECKLE_OPACITY_MAX: f32 = 0.96;
pub const SPECKLE_SIZE_MIN: f32 = 1.0;
pub const SPECKLE_SIZE_MAX: f32 = 2.0;

// Ambient audio
pub const AUDIO_START_DELAY_MS: i32 = 350;
pub const AUDIO_TARGET_VOLUME: f32 = 0.18;
pub const AUDIO_FADE_SEC: f32 = 2.0;

// Section reveal
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;
