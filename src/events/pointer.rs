use crate::core::pointer::PointerTarget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole document as the parallax target.
///
/// Single writer; the frame loop reads the latest value on its next tick.
pub fn wire_pointer_parallax(document: &web::Document, pointer: Rc<RefCell<PointerTarget>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        *pointer.borrow_mut() =
            PointerTarget::from_client(ev.client_x() as f32, ev.client_y() as f32, width, height);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());

    closure.forget();
}
