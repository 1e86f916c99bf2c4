//! INI-style text rendering of a resolved configuration.

use crate::config::ResolvedConfig;
use crate::domain::Value;

/// Render every group as a `[name]` header followed by `key = value` lines,
/// groups and keys in name order, groups separated by a blank line.
pub fn render_text(config: &ResolvedConfig) -> String {
    let mut sections = Vec::with_capacity(config.len());
    for (name, entries) in config.groups() {
        let mut section = format!("[{}]\n", name);
        for (key, value) in entries {
            section.push_str(&format!("{} = {}\n", key, render_value(value)));
        }
        sections.push(section);
    }
    sections.join("\n")
}

/// Render one value the way it would be written in a config file: strings
/// quoted, lists comma-separated. Strings holding a quote character are
/// rendered with escapes, since the file format has no way to express them.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.contains('"') => format!("{:?}", s),
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_str;

    #[test]
    fn test_render_value_quotes_strings_only() {
        assert_eq!(render_value(&Value::from("/tmp/")), "\"/tmp/\"");
        assert_eq!(render_value(&Value::Integer(3)), "3");
        assert_eq!(render_value(&Value::Float(3.0)), "3.0");
        assert_eq!(render_value(&Value::Bool(false)), "false");
        assert_eq!(render_value(&Value::List(vec!["a".into(), "b".into()])), "a, b");
    }

    #[test]
    fn test_render_value_escapes_embedded_quotes() {
        let config = load_str::<&str>("[k]\nv = \"a\" \"b\"\n", &[]).unwrap();
        let value = config.get("k", "v").unwrap();
        assert_eq!(value, &Value::from("a\"\"b"));
        assert_eq!(render_value(value), r#""a\"\"b""#);
    }

    #[test]
    fn test_render_text_sorted_sections() {
        let config =
            load_str::<&str>("[http]\npath = /tmp/\nenabled = yes\n[ftp]\nlimit = 10\n", &[]).unwrap();
        assert_eq!(
            render_text(&config),
            "[ftp]\nlimit = 10\n\n[http]\nenabled = true\npath = \"/tmp/\"\n"
        );
    }

    #[test]
    fn test_render_text_empty_config() {
        assert_eq!(render_text(&ResolvedConfig::default()), "");
    }
}
