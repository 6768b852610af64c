use dotfield_core::{Canvas, Rect};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Canvas`] backed by a browser 2D rendering context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Canvas for Canvas2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_shadow(&mut self, blur: f32, color: &str) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
    }
}
