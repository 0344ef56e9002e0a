use crate::constants::MSAA_SAMPLES;
use crate::core::camera::CameraRig;
use crate::core::constants::GLOW_TEXTURE_SIZE;
use crate::core::field::{rotations_at, ParticleField};
use crate::core::jitter::RngJitter;
use crate::core::pointer::PointerTarget;
use crate::core::scene::hero_scene;
use crate::core::texture::glow_texture;
use crate::core::viewport::Viewport;
use crate::entrance::EntranceRun;
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame update reads or mutates.
///
/// Listeners only write `pointer` and `viewport`; the rest is owned here.
pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub camera: CameraRig,
    pub pointer: Rc<RefCell<PointerTarget>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub entrance: Option<EntranceRun>,
    pub clock: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let t = self.clock.elapsed().as_secs_f32();
        let pointer = self.pointer.borrow().as_vec2();
        let viewport = *self.viewport.borrow();

        self.field.update(t, pointer);
        self.camera.set_aspect(viewport.aspect());
        self.camera.ease_toward(pointer);

        let settled = self
            .entrance
            .as_mut()
            .map(|run| !run.tick())
            .unwrap_or(false);
        if settled {
            self.entrance = None;
        }

        if let Some(g) = &mut self.gpu {
            let (w, h) = viewport.backing_size();
            g.resize_if_needed(w, h);
            let rotations = rotations_at(t);
            match g.render(&self.camera, &rotations, &self.field.positions) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    initial_positions: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let sprite = glow_texture(GLOW_TEXTURE_SIZE, &mut RngJitter(rand::thread_rng()));
    match render::GpuState::new(
        leaked_canvas,
        hero_scene(),
        &sprite,
        initial_positions,
        MSAA_SAMPLES,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to the self re-arming animation frame loop.
///
/// Dropping the handle leaves the loop running; `stop` ends it after the
/// frame in flight.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            log::info!("[scene] frame loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    FrameLoop { running }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
