//! JSON rendering

use crate::config::ResolvedConfig;
use crate::domain::Value;

/// Pretty-printed JSON object of groups, each an object of key → value.
pub fn render_json(config: &ResolvedConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}

pub fn render_value_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
