use crate::constants::*;
use crate::dom;
use crate::drill::{Drill, DrillMode, Reveal, CONSONANTS};
use crate::ui;
use crate::SharedEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDrill = Rc<RefCell<Drill>>;

/// Tap handlers for every reveal area. A reveal shows new content and then
/// gives the effect engine its chance to celebrate.
pub fn wire_reveal_areas(document: &web::Document, engine: &SharedEngine, drill: &SharedDrill) {
    for (area_id, mode_name) in REVEAL_AREAS {
        let Some(mode) = DrillMode::from_name(mode_name) else {
            continue;
        };
        let engine = engine.clone();
        let drill = drill.clone();
        let doc = document.clone();
        dom::add_click_listener(document, area_id, move || {
            {
                let eng = engine.borrow();
                if !eng.reveal_allowed() || eng.is_effect_in_cooldown() {
                    log::debug!("[reveal] {} ignored while an effect plays", area_id);
                    return;
                }
            }
            let reveal = drill.borrow_mut().reveal(mode, &mut rand::thread_rng());
            log::debug!("[reveal] {:?} -> {}", mode, reveal.text);
            if let Some(display) = ui::letter_display(&doc, area_id) {
                show_reveal(&display, &reveal);
            }
            if reveal.is_content {
                if let Some(kind) = engine.borrow_mut().trigger_random_effect() {
                    log::info!("[reveal] celebrating with {}", kind);
                }
            }
        });
    }
}

fn show_reveal(display: &web::Element, reveal: &Reveal) {
    display.set_text_content(Some(&reveal.text));
    let Some(el) = display.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let style = el.style();
    match reveal.style {
        Some(s) => {
            _ = style.set_property("font-family", s.font_family);
            _ = style.set_property("font-size", &format!("{:.1}rem", s.size_rem));
        }
        None => {
            _ = style.remove_property("font-family");
            _ = style.remove_property("font-size");
        }
    }
}

/// Tab buttons carry `data-tab` naming the id of their content panel.
pub fn wire_tabs(document: &web::Document) {
    for button in dom::query_all(document, TAB_BUTTON_SELECTOR) {
        let doc = document.clone();
        let this = button.clone();
        dom::add_listener(&button, "click", move || {
            for b in dom::query_all(&doc, TAB_BUTTON_SELECTOR) {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            for c in dom::query_all(&doc, TAB_CONTENT_SELECTOR) {
                _ = c.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(ACTIVE_CLASS);
            if let Some(panel) = this
                .get_attribute("data-tab")
                .and_then(|id| doc.get_element_by_id(&id))
            {
                _ = panel.class_list().add_1(ACTIVE_CLASS);
            }
        });
    }
}

/// Case toggle, random-style toggle, consonant grid and word-length slider.
pub fn wire_drill_controls(document: &web::Document, drill: &SharedDrill) {
    wire_case_toggle(document, drill);
    wire_random_style(document, drill);
    if let Err(e) = build_consonant_grid(document, drill) {
        log::error!("[reveal] consonant grid: {:?}", e);
    }
    wire_letter_count(document, drill);
}

fn wire_case_toggle(document: &web::Document, drill: &SharedDrill) {
    let drill = drill.clone();
    let doc = document.clone();
    dom::add_click_listener(document, CASE_TOGGLE_ID, move || {
        let case = drill.borrow_mut().toggle_case();
        dom::set_text(&doc, CASE_TEXT_ID, case.toggle_label());
        let selector = format!("{TAB_CONTENT_SELECTOR}.{ACTIVE_CLASS} {LETTER_DISPLAY_SELECTOR}");
        if let Ok(Some(display)) = doc.query_selector(&selector) {
            let shown = display.text_content().unwrap_or_default();
            if let Some(recased) = drill.borrow().recase(&shown) {
                display.set_text_content(Some(&recased));
            }
        }
    });
}

fn wire_random_style(document: &web::Document, drill: &SharedDrill) {
    let Some(input) = dom::input_by_id(document, RANDOM_STYLE_TOGGLE_ID) else {
        return;
    };
    drill.borrow_mut().set_random_style(input.checked());
    let drill = drill.clone();
    let this = input.clone();
    dom::add_listener(&input, "change", move || {
        drill.borrow_mut().set_random_style(this.checked());
    });
}

fn build_consonant_grid(document: &web::Document, drill: &SharedDrill) -> anyhow::Result<()> {
    let Some(grid) = document.get_element_by_id(CONSONANTS_GRID_ID) else {
        return Ok(());
    };
    let js_err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    for consonant in CONSONANTS {
        let item = document.create_element("div").map_err(js_err)?;
        item.set_class_name("consonant-item");

        let checkbox = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let id = format!("consonant-{consonant}");
        checkbox.set_type("checkbox");
        checkbox.set_id(&id);
        checkbox.set_value(consonant);
        checkbox.set_checked(true);

        let label = document.create_element("label").map_err(js_err)?;
        _ = label.set_attribute("for", &id);
        label.set_text_content(Some(consonant));

        let drill = drill.clone();
        let this = checkbox.clone();
        dom::add_listener(&checkbox, "change", move || {
            drill.borrow_mut().set_consonant(consonant, this.checked());
        });

        item.append_child(&checkbox).map_err(js_err)?;
        item.append_child(&label).map_err(js_err)?;
        grid.append_child(&item).map_err(js_err)?;
    }
    Ok(())
}

fn wire_letter_count(document: &web::Document, drill: &SharedDrill) {
    let Some(slider) = dom::input_by_id(document, LETTER_COUNT_ID) else {
        return;
    };
    let apply = {
        let drill = drill.clone();
        let doc = document.clone();
        let slider = slider.clone();
        move || {
            let wanted = slider.value().parse::<usize>().unwrap_or_default();
            let stored = drill.borrow_mut().set_word_letters(wanted);
            dom::set_text(&doc, LETTER_COUNT_VALUE_ID, &stored.to_string());
        }
    };
    apply();
    dom::add_listener(&slider, "input", apply);
}
