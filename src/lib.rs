#![cfg(target_arch = "wasm32")]
use dotfield_core::{FieldConfig, FieldEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let surface = dom::sync_canvas_backing_size(&canvas);
    let canvas2d = render::Canvas2d::from_canvas(&canvas)?;

    let engine = Rc::new(RefCell::new(FieldEngine::from_entropy(
        FieldConfig::default(),
        surface,
    )));

    events::wire_settings_panel(&document, engine.clone());
    events::wire_pointer_handlers(&canvas, engine.clone());
    events::wire_window_handlers(&canvas, engine.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas: canvas2d,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
