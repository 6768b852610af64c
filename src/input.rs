use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Map a client-space point into canvas backing-store pixels.
///
/// `rect_origin`/`rect_size` are the canvas' CSS bounding box and
/// `backing_size` its pixel width/height. A collapsed box maps 1:1.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * backing_size
    } else {
        local
    }
}

// ---------------- Settings helpers ----------------

/// Parse a slider's string value; `None` for anything that is not a finite number.
#[inline]
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text shown next to a slider: integers without decimals, others trimmed.
pub fn format_slider_value(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.*}", precision, value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
