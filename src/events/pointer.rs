use crate::input;
use crate::ui;
use crate::SharedEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route canvas pointer input to the active effect. The canvas only
/// receives events while an interactive effect is Active (pointer-events
/// is toggled by the lifecycle).
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, engine: &SharedEngine) {
    wire_pointermove(canvas, engine);
    wire_click(canvas, engine);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, engine: &SharedEngine) {
    let canvas_inner = canvas.clone();
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_inner);
        let actionable = engine.borrow().pointer_hover(pos.x, pos.y);
        ui::set_canvas_cursor(&canvas_inner, actionable);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(canvas: &web::HtmlCanvasElement, engine: &SharedEngine) {
    let canvas_inner = canvas.clone();
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_inner);
        let delivered = engine.borrow_mut().pointer_click(pos.x, pos.y);
        if delivered {
            log::debug!("[click] effect at ({:.0},{:.0})", pos.x, pos.y);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
