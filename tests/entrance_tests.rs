// Host-side tests for the hero entrance tweens and ambient audio policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod entrance {
    include!("../src/core/entrance.rs");
}
mod ambient {
    include!("../src/core/ambient.rs");
}

use ambient::*;
use entrance::*;
use tween::{progress, Ease};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn eases_pin_endpoints() {
    for ease in [Ease::Power1Out, Ease::Power3Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
    assert!(approx(Ease::Power1Out.apply(0.5), 0.75));
    assert!(approx(Ease::Power3Out.apply(0.5), 0.9375));
}

#[test]
fn progress_respects_delay_and_duration() {
    assert_eq!(progress(0.2, 0.3, 0.9), 0.0);
    assert!(approx(progress(0.75, 0.3, 0.9), 0.5));
    assert_eq!(progress(5.0, 0.3, 0.9), 1.0);
    assert_eq!(progress(0.1, 0.3, 0.0), 0.0);
    assert_eq!(progress(0.3, 0.3, 0.0), 1.0);
}

#[test]
fn steps_match_the_hero_choreography() {
    let [eyebrow, title, sub, buttons] = ENTRANCE_STEPS;
    assert_eq!(eyebrow.from_y, 8.0);
    assert_eq!(eyebrow.ease, Ease::Power1Out);
    assert_eq!(title.from_y, 18.0);
    assert_eq!(title.ease, Ease::Power3Out);
    assert_eq!(sub.delay, 0.6);
    assert_eq!(buttons.selector, ".hero-actions .btn");
    assert_eq!(buttons.stagger, 0.08);
}

#[test]
fn elements_start_hidden_and_offset() {
    for step in ENTRANCE_STEPS {
        let s = step.sample(0.0, 0);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.translate_y, step.from_y);
    }
}

#[test]
fn elements_settle_at_their_end_time() {
    for step in ENTRANCE_STEPS {
        assert_eq!(step.sample(step.end_time(1) + 0.01, 0), TweenState::SETTLED);
        assert_eq!(step.sample(60.0, 0), TweenState::SETTLED);
    }
}

#[test]
fn title_mid_tween() {
    let title = ENTRANCE_STEPS[1];
    let s = title.sample(0.4 + 0.6, 0);
    assert!(approx(s.opacity, 0.9375));
    assert!(approx(s.translate_y, 18.0 * 0.0625));
}

#[test]
fn buttons_are_staggered() {
    let buttons = ENTRANCE_STEPS[3];
    assert!(approx(buttons.start_time(2), 0.96));
    assert!(approx(buttons.end_time(3), 1.86));
    let first = buttons.sample(0.9, 0);
    let third = buttons.sample(0.9, 2);
    assert!(first.opacity > 0.0);
    assert_eq!(third.opacity, 0.0);
    assert_eq!(third.translate_y, 10.0);
}

#[test]
fn choreography_duration_tracks_matched_elements() {
    assert!(approx(Choreography::new(&[1, 1, 1, 3]).total_duration(), 1.86));
    assert!(approx(Choreography::new(&[1, 0, 0, 0]).total_duration(), 1.2));
    assert_eq!(Choreography::new(&[0, 0, 0, 0]).total_duration(), 0.0);
}

#[test]
fn choreography_finishes_exactly_once() {
    let mut c = Choreography::new(&[1, 1, 1, 2]);
    assert!(!c.advance(0.5));
    assert!(!c.is_finished());
    assert!(c.advance(2.0));
    assert!(c.is_finished());
    assert!(!c.advance(3.0));
    assert!(!c.advance(100.0));
}

#[test]
fn empty_page_finishes_immediately() {
    let mut c = Choreography::new(&[0, 0, 0, 0]);
    assert!(c.advance(0.0));
}

#[test]
fn mobile_user_agents_are_detected() {
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
    ));
    assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
    assert!(is_mobile_user_agent("SOMETHING ANDROID"));
    assert!(!is_mobile_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36"
    ));
    assert!(!is_mobile_user_agent(""));
}

#[test]
fn only_started_playback_fades_in() {
    assert!(PlayOutcome::Started.should_fade_in());
    assert!(!PlayOutcome::Blocked.should_fade_in());
}

#[test]
fn autoplay_delay_counts_from_load() {
    assert_eq!(autoplay_delay_ms(0.0), 350);
    assert_eq!(autoplay_delay_ms(0.1), 250);
    // Slow start-up already used the whole delay.
    assert_eq!(autoplay_delay_ms(0.35), 0);
    assert_eq!(autoplay_delay_ms(2.0), 0);
    assert_eq!(autoplay_delay_ms(-1.0), 350);
}

#[test]
fn entrance_is_sampled_from_load_time() {
    // Late first frame: the title is already mid-tween, not restarted.
    let title = ENTRANCE_STEPS[1];
    let late = title.sample(1.0, 0);
    assert!(late.opacity > 0.9);
    assert!(late.translate_y < 2.0);
}

#[test]
fn fade_ramps_to_ambient_level() {
    assert_eq!(fade_volume(0.0), 0.0);
    assert!(approx(fade_volume(1.0), 0.135));
    assert!(approx(fade_volume(2.0), 0.18));
    assert!(approx(fade_volume(10.0), 0.18));
    assert!(!fade_finished(1.99));
    assert!(fade_finished(2.0));

    let mut prev = 0.0;
    for step in 0..=40 {
        let v = fade_volume(step as f32 * 0.05);
        assert!(v >= prev && v <= 0.18 + 1e-6);
        prev = v;
    }
}
