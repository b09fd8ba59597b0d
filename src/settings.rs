use crate::constants::*;
use crate::dom;
use crate::SharedEngine;
use lectura_core::EffectSettings;
use web_sys as web;

/// Seconds label for a millisecond value, e.g. `4000.0` -> `"4.0s"`.
pub fn seconds_label(ms: f64) -> String {
    format!("{:.1}s", ms / 1000.0)
}

/// Initialise the settings panel from the engine and keep the engine in
/// sync with it. Inputs carry raw values (interval count, milliseconds).
pub fn wire_settings_panel(document: &web::Document, engine: &SharedEngine) {
    let current = engine.borrow().effect_settings();
    init_inputs(document, &current);

    if let Some(input) = dom::input_by_id(document, SETTING_ENABLED_ID) {
        let engine = engine.clone();
        let this = input.clone();
        dom::add_listener(&input, "change", move || {
            engine.borrow_mut().set_effects_enabled(this.checked());
        });
    }

    wire_number(document, engine, SETTING_INTERVAL_ID, |eng, v| {
        eng.set_effect_interval(v.max(0.0) as u32);
        eng.effect_settings().interval.to_string()
    });
    wire_number(document, engine, SETTING_DURATION_ID, |eng, v| {
        eng.set_effect_duration(v);
        seconds_label(eng.effect_settings().duration_ms)
    });
    wire_number(document, engine, SETTING_COOLDOWN_ID, |eng, v| {
        eng.set_effect_cooldown(v);
        seconds_label(eng.effect_settings().cooldown_ms)
    });
}

fn init_inputs(document: &web::Document, s: &EffectSettings) {
    if let Some(input) = dom::input_by_id(document, SETTING_ENABLED_ID) {
        input.set_checked(s.enabled);
    }
    let numeric = [
        (SETTING_INTERVAL_ID, s.interval as f64, s.interval.to_string()),
        (SETTING_DURATION_ID, s.duration_ms, seconds_label(s.duration_ms)),
        (SETTING_COOLDOWN_ID, s.cooldown_ms, seconds_label(s.cooldown_ms)),
    ];
    for (id, value, label) in numeric {
        if let Some(input) = dom::input_by_id(document, id) {
            input.set_value(&value.to_string());
        }
        dom::set_text(document, &format!("{id}Value"), &label);
    }
}

/// `input` listener that parses the value, applies it and refreshes the
/// `<id>Value` label with whatever the engine actually stored.
fn wire_number(
    document: &web::Document,
    engine: &SharedEngine,
    id: &'static str,
    apply: impl Fn(&mut crate::WebEngine, f64) -> String + 'static,
) {
    let Some(input) = dom::input_by_id(document, id) else {
        return;
    };
    let engine = engine.clone();
    let doc = document.clone();
    let this = input.clone();
    dom::add_listener(&input, "input", move || {
        let Ok(value) = this.value().trim().parse::<f64>() else {
            return;
        };
        let label = apply(&mut engine.borrow_mut(), value);
        dom::set_text(&doc, &format!("{id}Value"), &label);
    });
}
