//! Output rendering (INI-style text, JSON)

pub mod json;
pub mod text;

pub use json::{render_json, render_value_json};
pub use text::{render_text, render_value};
