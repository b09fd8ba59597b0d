#![cfg(target_arch = "wasm32")]
use lectura_core::{EffectConfig, EffectEngine};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod drill;
mod events;
mod frame;
mod handle;
mod input;
mod platform;
mod settings;
mod ui;

pub use handle::EffectsHandle;

use constants::{EFFECTS_CANVAS_ID, JS_HANDLE_NAME};
use platform::WebPlatform;

pub type WebEngine = EffectEngine<WebPlatform>;
pub type SharedEngine = Rc<RefCell<WebEngine>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
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
    log::info!("lectura-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(EFFECTS_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", EFFECTS_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let frames = frame::FrameLoop::new();
    let platform = WebPlatform::new(
        &window,
        document.clone(),
        canvas.clone(),
        ctx,
        frames.clone(),
    );
    let engine: SharedEngine = Rc::new(RefCell::new(EffectEngine::new(
        platform,
        EffectConfig::default(),
    )));
    frames.install(&engine);
    ui::set_canvas_interactive(engine.borrow().platform().canvas(), false);

    let drill = Rc::new(RefCell::new(drill::Drill::new()));
    events::wire_pointer_handlers(&canvas, &engine);
    events::wire_reveal_areas(&document, &engine, &drill);
    events::wire_tabs(&document);
    events::wire_drill_controls(&document, &drill);
    settings::wire_settings_panel(&document, &engine);

    let handle = EffectsHandle::new(engine.clone());
    js_sys::Reflect::set(&window, &JS_HANDLE_NAME.into(), &JsValue::from(handle))
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let s = engine.borrow().effect_settings();
    log::info!(
        "[effects] ready enabled={} interval={} duration={}ms cooldown={}ms",
        s.enabled,
        s.interval,
        s.duration_ms,
        s.cooldown_ms
    );
    Ok(())
}
