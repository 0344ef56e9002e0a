// Host-side tests for scroll-driven section reveal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::SectionReveal;

#[test]
fn sections_above_the_line_are_revealed() {
    let mut r = SectionReveal::new(3, 0.8);
    // Line sits at 800 * 0.8 = 640.
    let newly = r.update(&[100.0, 639.0, 640.0], 800.0);
    assert_eq!(newly, vec![0, 1]);
    assert!(r.is_revealed(0) && r.is_revealed(1));
    assert!(!r.is_revealed(2));
}

#[test]
fn reveal_is_monotonic() {
    let mut r = SectionReveal::new(2, 0.8);
    assert_eq!(r.update(&[200.0, 1500.0], 800.0), vec![0]);
    // Scrolling back up pushes the first section below the line again.
    assert!(r.update(&[1200.0, 2500.0], 800.0).is_empty());
    assert!(r.is_revealed(0));
    assert_eq!(r.revealed_count(), 1);
}

#[test]
fn each_section_is_reported_once() {
    let mut r = SectionReveal::new(2, 0.8);
    assert_eq!(r.update(&[0.0, 0.0], 800.0), vec![0, 1]);
    assert!(r.update(&[0.0, 0.0], 800.0).is_empty());
    assert_eq!(r.revealed_count(), r.len());
}

#[test]
fn scrolling_reveals_in_order() {
    let mut r = SectionReveal::new(3, 0.8);
    let base = [700.0, 1400.0, 2100.0];
    let mut order = Vec::new();
    for scroll in (0..=2000).step_by(100) {
        let tops: Vec<f64> = base.iter().map(|t| t - scroll as f64).collect();
        order.extend(r.update(&tops, 800.0));
    }
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn short_tops_slice_only_touches_listed_sections() {
    let mut r = SectionReveal::new(3, 0.8);
    assert_eq!(r.update(&[0.0], 800.0), vec![0]);
    assert!(!r.is_revealed(1));
    assert!(!r.is_revealed(7));
}

#[test]
fn no_sections_is_fine() {
    let mut r = SectionReveal::new(0, 0.8);
    assert!(r.is_empty());
    assert!(r.update(&[], 800.0).is_empty());
}
