use crate::constants::{SLIDER_DISPLAY_PRECISION, SLIDER_VALUE_SUFFIX};
use crate::dom;
use crate::input;
use dotfield_core::{FieldEngine, SETTING_KEYS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seed every slider present on the page from the engine config and route
/// its `input` events back into the engine. Missing sliders are skipped.
pub fn wire_settings_panel(document: &web::Document, engine: Rc<RefCell<FieldEngine>>) {
    for &key in SETTING_KEYS {
        let Some(slider) = dom::input_by_id(document, key) else {
            continue;
        };
        let value_id = format!("{}{}", key, SLIDER_VALUE_SUFFIX);
        if let Some(v) = engine.borrow().config.setting(key) {
            slider.set_value(&v.to_string());
            dom::set_text(
                document,
                &value_id,
                &input::format_slider_value(v, SLIDER_DISPLAY_PRECISION),
            );
        }

        let e = engine.clone();
        let doc = document.clone();
        let slider_for_read = slider.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(v) = input::parse_slider_value(&slider_for_read.value()) else {
                log::warn!("[settings] ignoring non-numeric value for {}", key);
                return;
            };
            match e.borrow_mut().apply_setting(key, v) {
                Ok(()) => {
                    dom::set_text(
                        &doc,
                        &value_id,
                        &input::format_slider_value(v, SLIDER_DISPLAY_PRECISION),
                    );
                    log::info!("[settings] {}: {}", key, v);
                }
                Err(err) => log::warn!("[settings] {}", err),
            }
        }) as Box<dyn FnMut()>);
        _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
