use crate::dom;
use crate::input;
use dotfield_core::FieldEngine;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

fn add_mouse_listener(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    mut handler: impl FnMut(Vec2) + 'static,
) {
    let canvas_for_pos = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handler(event_canvas_px(&ev, &canvas_for_pos));
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, engine: Rc<RefCell<FieldEngine>>) {
    let e = engine.clone();
    add_mouse_listener(canvas, "mousemove", move |pos| {
        e.borrow_mut().pointer_moved(pos, Instant::now());
    });

    let e = engine.clone();
    add_mouse_listener(canvas, "mousedown", move |pos| {
        if e.borrow_mut().pressed(pos) {
            log::debug!("[mouse] capture at ({:.0},{:.0})", pos.x, pos.y);
        }
    });

    let e = engine;
    add_mouse_listener(canvas, "mouseup", move |pos| {
        if let Some(outcome) = e.borrow_mut().released(pos) {
            log::info!("[mouse] release: {:?}", outcome);
        }
    });
}

/// Blur cancels any capture; resize resyncs the canvas and re-seeds particles.
pub fn wire_window_handlers(canvas: &web::HtmlCanvasElement, engine: Rc<RefCell<FieldEngine>>) {
    let Some(window) = web::window() else {
        return;
    };

    let e = engine.clone();
    let blur = Closure::wrap(Box::new(move || {
        e.borrow_mut().focus_lost();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();

    let canvas_resize = canvas.clone();
    let resize = Closure::wrap(Box::new(move || {
        let surface = dom::sync_canvas_backing_size(&canvas_resize);
        engine.borrow_mut().resize(surface);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    resize.forget();
}
