use crate::constants::{REVEAL_CLASS, SECTION_SELECTOR};
use crate::core::constants::REVEAL_VIEWPORT_FRACTION;
use crate::core::reveal::SectionReveal;
use crate::core::viewport::Viewport;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store matched to the window and publish the
/// viewport for the frame loop, which syncs camera aspect and surface size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, viewport: Rc<RefCell<Viewport>>) {
    let canvas = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let vp = dom::read_viewport(&window);
        dom::sync_canvas_backing_size(&canvas, &vp);
        *viewport.borrow_mut() = vp;
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Reveal page sections as their tops scroll above the reveal line.
///
/// Sections are captured once; the check also runs immediately so content
/// above the fold is shown without scrolling.
pub fn wire_scroll_reveal(document: &web::Document) {
    let sections = dom::query_elements(document, SECTION_SELECTOR);
    if sections.is_empty() {
        log::info!("[reveal] no sections matched {:?}", SECTION_SELECTOR);
        return;
    }
    let mut reveal = SectionReveal::new(sections.len(), REVEAL_VIEWPORT_FRACTION);
    let mut check = move || reveal_visible(&sections, &mut reveal);
    check();

    let scroll_closure = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref());
    }
    scroll_closure.forget();
}

fn reveal_visible(sections: &[web::Element], reveal: &mut SectionReveal) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let tops: Vec<f64> = sections
        .iter()
        .map(|s| s.get_bounding_client_rect().top())
        .collect();
    for i in reveal.update(&tops, viewport_h) {
        _ = sections[i].class_list().add_1(REVEAL_CLASS);
        log::debug!("[reveal] section {} revealed", i);
    }
}
