use crate::constants::MAX_PIXEL_RATIO;
use crate::core::viewport::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        return true;
    }
    false
}

/// All elements matching `selector`, in document order.
pub fn query_elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_elements(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Current window inner size and clamped device pixel ratio.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(css_w, css_h, window.device_pixel_ratio(), MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

/// Resolve after `ms` milliseconds on the event loop.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window()
            .map(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
