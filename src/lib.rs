#![cfg(target_arch = "wasm32")]
use crate::core::camera::CameraRig;
use crate::core::constants::PARTICLE_COUNT;
use crate::core::field::ParticleField;
use crate::core::jitter::RngJitter;
use crate::core::pointer::PointerTarget;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod entrance;
mod events;
mod frame;
mod render;

thread_local! {
    static FRAME_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vortex-hero starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the hero animation loop, e.g. before the page removes the canvas.
#[wasm_bindgen(js_name = stopScene)]
pub fn stop_scene() {
    if let Some(frame_loop) = FRAME_LOOP.with(|slot| slot.borrow_mut().take()) {
        frame_loop.stop();
    }
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    // Entrance, audio delay and scene time all count from here
    let loaded = Instant::now();

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // ---------------- Page choreography and audio ----------------
    events::wire_scroll_reveal(&document);
    let entrance = entrance::EntranceRun::begin(&document, loaded);
    if let Some(ambient) = audio::AmbientAudio::attach(&window, &document) {
        audio::wire_fallback(&document, &ambient);
        audio::schedule_autoplay(&ambient, loaded);
    }

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the canvas before the surface is created so the first frame is sharp
    let viewport = dom::read_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let viewport = Rc::new(RefCell::new(viewport));

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(PointerTarget::default()));
    events::wire_pointer_parallax(&document, pointer.clone());
    events::wire_resize(&canvas, viewport.clone());

    let field = ParticleField::generate(PARTICLE_COUNT, &mut RngJitter(rand::thread_rng()));
    let initial_positions = field.positions.clone();
    let aspect = viewport.borrow().aspect();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        camera: CameraRig::new(aspect),
        pointer,
        viewport,
        gpu: None,
        entrance: Some(entrance),
        clock: loaded,
    }));
    // The loop drives the entrance while the adapter is still being requested
    let frame_loop = frame::start_loop(frame_ctx.clone());
    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

    let gpu = frame::init_gpu(&canvas, &initial_positions).await;
    let attached = gpu.is_some();
    frame_ctx.borrow_mut().gpu = gpu;
    log::info!(
        "[scene] gpu attached={} particles={} after {:.0}ms",
        attached,
        PARTICLE_COUNT,
        loaded.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
