use crate::constants::MIN_CANVAS_PX;
use dotfield_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size and return the new surface.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Surface {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() as u32).max(MIN_CANVAS_PX);
    let h_px = (rect.height() as u32).max(MIN_CANVAS_PX);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    canvas_surface(canvas)
}

#[inline]
pub fn canvas_surface(canvas: &web::HtmlCanvasElement) -> Surface {
    Surface::new(canvas.width() as f32, canvas.height() as f32)
}

#[inline]
pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
