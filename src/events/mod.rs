mod pointer;
mod settings;

pub use pointer::{wire_pointer_handlers, wire_window_handlers};
pub use settings::wire_settings_panel;
