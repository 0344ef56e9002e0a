// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Easing and blend fractions
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    assert!(BACKDROP_LIGHT_WEIGHT >= 0.0 && BACKDROP_LIGHT_WEIGHT <= 1.0);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION <= 1.0);

    // Opacities
    assert!(RING_OPACITY > 0.0 && RING_OPACITY <= 1.0);
    assert!(STREAK_OPACITY > 0.0 && STREAK_OPACITY <= 1.0);
    assert!(SPECKLE_OPACITY_MIN >= 0.0 && SPECKLE_OPACITY_MAX <= 1.0);

    // Audio
    assert!(AUDIO_TARGET_VOLUME > 0.0 && AUDIO_TARGET_VOLUME <= 1.0);
    assert!(AUDIO_FADE_SEC > 0.0);
    assert!(AUDIO_START_DELAY_MS >= 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_radii_stay_positive() {
    // Smallest nominal radius minus jitter, after breathing shrinks it
    let inner = (FIELD_INNER_RADIUS - RADIUS_JITTER) * (BREATH_BASE - BREATH_AMPLITUDE);
    assert!(inner > 0.0);
    assert!(BREATH_BASE + BREATH_AMPLITUDE < 1.0);
    assert!(RING_INNER < RING_OUTER);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_scene() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    // Streak sits behind the origin but in front of the far plane
    assert!(CAMERA_Z - STREAK_Z < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn texture_and_speckle_ranges_are_ordered() {
    assert!(GLOW_TEXTURE_SIZE.is_power_of_two());
    assert!(SPECKLE_OPACITY_MIN < SPECKLE_OPACITY_MAX);
    assert!(SPECKLE_SIZE_MIN >= 1.0 && SPECKLE_SIZE_MIN < SPECKLE_SIZE_MAX);
    assert!(SPECKLE_SPREAD > 0.0 && SPECKLE_SPREAD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_is_sane() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!AUDIO_ID.is_empty());
    assert_ne!(CANVAS_ID, AUDIO_ID);
    assert!(SECTION_SELECTOR.ends_with(".section"));
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MSAA_SAMPLES > 1 && MSAA_SAMPLES.is_power_of_two());
    assert!(DRIFT_BUCKETS > 0);
}
