use crate::constants::{LETTER_DISPLAY_SELECTOR, REVEAL_AREAS, REVEAL_DISABLED_CLASS};
use lectura_core::LifecycleState;
use web_sys as web;

const PHASES: [LifecycleState; 2] = [LifecycleState::Active, LifecycleState::Cooldown];

/// Put exactly the class for `state` on `<html>`.
pub fn set_phase_class(document: &web::Document, state: LifecycleState) {
    let Some(root) = document.document_element() else {
        return;
    };
    let cl = root.class_list();
    for phase in PHASES {
        if let Some(class) = phase.css_class() {
            if phase == state {
                _ = cl.add_1(class);
            } else {
                _ = cl.remove_1(class);
            }
        }
    }
}

/// Mark reveal areas as (non-)tappable. Handlers also check the engine, so
/// this is the visual half of the block.
pub fn set_reveal_enabled(document: &web::Document, enabled: bool) {
    for (id, _) in REVEAL_AREAS {
        if let Some(el) = document.get_element_by_id(id) {
            let cl = el.class_list();
            if enabled {
                _ = cl.remove_1(REVEAL_DISABLED_CLASS);
            } else {
                _ = cl.add_1(REVEAL_DISABLED_CLASS);
            }
            _ = el.set_attribute("aria-disabled", if enabled { "false" } else { "true" });
        }
    }
}

pub fn set_canvas_interactive(canvas: &web::HtmlCanvasElement, interactive: bool) {
    let style = canvas.style();
    _ = style.set_property("pointer-events", if interactive { "auto" } else { "none" });
    if !interactive {
        _ = style.set_property("cursor", "default");
    }
}

pub fn set_canvas_cursor(canvas: &web::HtmlCanvasElement, actionable: bool) {
    _ = canvas
        .style()
        .set_property("cursor", if actionable { "pointer" } else { "default" });
}

/// Text element inside a reveal area.
pub fn letter_display(document: &web::Document, area_id: &str) -> Option<web::Element> {
    document
        .get_element_by_id(area_id)
        .and_then(|el| el.query_selector(LETTER_DISPLAY_SELECTOR).ok().flatten())
}
