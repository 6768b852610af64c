// DOM ids and class names used by the web front-end.

pub const CANVAS_ID: &str = "dotCanvas";

// Each slider shows its value in an element with this suffix, e.g. `hueValue`.
pub const SLIDER_VALUE_SUFFIX: &str = "Value";

// Decimal places shown next to a slider
pub const SLIDER_DISPLAY_PRECISION: usize = 2;

// Minimum backing-store size in pixels per axis
pub const MIN_CANVAS_PX: u32 = 1;
