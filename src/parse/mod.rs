//! Line parsing: classification, setting scanning and value coercion

pub mod classify;
pub mod rules;
pub mod setting;
pub mod value;

pub use classify::{classify, LineKind};
pub use rules::{numbered_lines, parse_lines};
pub use setting::scan_setting;
pub use value::coerce;
