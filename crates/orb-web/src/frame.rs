use crate::render;
use instant::Instant;
use orb_core::OrbScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FPS_LOG_INTERVAL_SEC: f64 = 10.0;

pub struct FrameContext<'a> {
    pub scene: OrbScene,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_log: Instant,
    pub frames_since_log: u32,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        self.scene.tick();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }

        self.frames_since_log += 1;
        let elapsed = self.last_log.elapsed().as_secs_f64();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::info!(
                "orb: {:.1} fps, frame {}",
                self.frames_since_log as f64 / elapsed,
                self.scene.frame_count()
            );
            self.last_log = Instant::now();
            self.frames_since_log = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
