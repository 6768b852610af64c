//! Drawing seam between the engine and a concrete 2D surface.

use crate::engine::FrameView;
use crate::state::Rect;
use glam::Vec2;

pub const PARTICLE_SHADOW_BLUR: f32 = 10.0;
pub const LINK_SHADOW_BLUR: f32 = 5.0;
pub const EDGE_LINE_WIDTH: f32 = 1.5;
pub const POINTER_LINE_WIDTH: f32 = 2.0;
pub const OUTLINE_LINE_WIDTH: f32 = 2.0;
pub const OUTLINE_COLOR: &str = "rgba(255, 0, 0, 0.8)";

/// Primitive draw calls a surface must provide.
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn set_shadow(&mut self, blur: f32, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str);
}

#[inline]
pub fn hsl(hue: f32) -> String {
    format!("hsl({}, 100%, 50%)", hue)
}

#[inline]
pub fn hsla(hue: f32, alpha: f32) -> String {
    format!("hsla({}, 100%, 50%, {})", hue, alpha)
}

/// Draw one frame: particles, then edges, then pointer links, then the
/// optional drag outline.
pub fn draw_frame<C: Canvas + ?Sized>(view: &FrameView<'_>, canvas: &mut C) {
    let glow = hsl(view.hue);
    canvas.clear(view.surface.width, view.surface.height);

    canvas.set_shadow(PARTICLE_SHADOW_BLUR, &glow);
    for rp in view.render_particles() {
        canvas.fill_circle(rp.render_position, rp.size, &hsla(view.hue, rp.opacity));
    }

    canvas.set_shadow(LINK_SHADOW_BLUR, &glow);
    canvas.set_line_width(EDGE_LINE_WIDTH);
    for e in view.edges {
        canvas.stroke_line(
            view.render_position(e.a),
            view.render_position(e.b),
            &hsla(view.hue, e.opacity),
        );
    }

    if let Some(mouse) = view.pointer {
        canvas.set_line_width(POINTER_LINE_WIDTH);
        for link in view.pointer_links {
            canvas.stroke_line(
                mouse,
                view.render_position(link.particle),
                &hsla(view.hue, link.opacity),
            );
        }
    }

    if view.show_drag_outline {
        if let Some(rect) = view.drag_rect {
            canvas.set_line_width(OUTLINE_LINE_WIDTH);
            canvas.stroke_rect(rect, OUTLINE_COLOR);
        }
    }
}
