use crate::SharedEngine;
use lectura_core::{Generation, TickHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduler for the engine.
///
/// One persistent closure is installed once; each request records the
/// generation it was made for and the closure hands that generation back to
/// `EffectEngine::on_frame`, which ignores it if the session has moved on.
#[derive(Clone, Default)]
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    queued: Rc<Cell<Option<Generation>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the loop to the engine it drives. Holds a weak reference so the
    /// engine (which owns this loop) can still be dropped.
    pub fn install(&self, engine: &SharedEngine) {
        let engine = Rc::downgrade(engine);
        let queued = self.queued.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(generation) = queued.take() else {
                return;
            };
            if let Some(engine) = engine.upgrade() {
                engine.borrow_mut().on_frame(generation);
            }
        }) as Box<dyn FnMut()>));
    }

    pub fn request(&self, generation: Generation) -> Option<TickHandle> {
        let tick = self.tick.borrow();
        let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) else {
            log::warn!("[frame] no window or frame loop not installed");
            return None;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.queued.set(Some(generation));
                Some(TickHandle(id as u32 as u64))
            }
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    pub fn cancel(&self, handle: TickHandle) {
        self.queued.set(None);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0 as u32 as i32);
        }
    }
}
