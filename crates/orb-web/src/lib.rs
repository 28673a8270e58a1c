#![cfg(target_arch = "wasm32")]
//! Browser entry point for the voice orb.
//!
//! The voice-agent transport lives in JS; its callbacks forward into the
//! exported `on_*` functions below, which post typed events into the scene's
//! queue. Everything else (smoothing, geometry, drawing) runs in the
//! requestAnimationFrame loop.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use orb_core::{EventSender, OrbScene, Role, SessionEvent};

mod dom;
mod frame;
mod render;

thread_local! {
    static SESSION_SENDER: RefCell<Option<EventSender>> = const { RefCell::new(None) };
}

fn post(event: SessionEvent) {
    SESSION_SENDER.with(|s| match &*s.borrow() {
        Some(sender) => sender.send(event),
        None => log::warn!("orb not initialized yet, dropping {event:?}"),
    });
}

/// Transport glue: a conversation message arrived; `role` is the transport's
/// role string (`"assistant"` drives the swell, anything else settles).
#[wasm_bindgen]
pub fn on_message(role: &str) {
    post(SessionEvent::Message {
        role: Role::parse(role),
    });
}

/// Transport glue: the agent's mode string changed (`"speaking"` or other).
#[wasm_bindgen]
pub fn on_mode_change(mode: &str) {
    post(SessionEvent::mode_change(mode));
}

/// Transport glue: connection status string changed; logged only.
#[wasm_bindgen]
pub fn on_status_change(status: &str) {
    post(SessionEvent::StatusChange {
        status: status.to_string(),
    });
}

/// Transport glue: the session ended or dropped.
#[wasm_bindgen]
pub fn on_disconnect() {
    post(SessionEvent::Disconnected);
}

/// Transport glue: a session error; logged, no visual change.
#[wasm_bindgen]
pub fn on_error(message: &str) {
    post(SessionEvent::Error {
        message: message.to_string(),
    });
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("orb-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #orb-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store in sync with CSS size * devicePixelRatio; the
    // render loop picks up the new size without resetting animation state.
    wire_canvas_resize(&canvas);

    let (scene, sender) = OrbScene::new(js_sys::Date::now() as u64);
    SESSION_SENDER.with(|s| *s.borrow_mut() = Some(sender));

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        last_log: Instant::now(),
        frames_since_log: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
