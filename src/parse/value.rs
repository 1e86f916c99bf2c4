//! Coercion of raw value text into typed values.
//!
//! ORDER MATTERS: booleans are checked before integers so `0`/`1` become
//! booleans, and quoted strings are checked before lists so a comma inside
//! quotes never splits the value.

use crate::domain::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid regex"));
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"(.*)"$"#).expect("valid regex"));

/// Convert raw value text into a [`Value`].
///
/// Total: text that matches no typed pattern is kept verbatim as a string.
pub fn coerce(text: &str) -> Value {
    if matches!(text, "no" | "false" | "0") {
        return Value::Bool(false);
    }
    if matches!(text, "yes" | "true" | "1") {
        return Value::Bool(true);
    }
    if INTEGER.is_match(text) {
        // Digits beyond i64 range fall through and end up as a string
        if let Ok(n) = text.parse::<i64>() {
            return Value::Integer(n);
        }
    }
    if FLOAT.is_match(text) {
        // Digit runs too long for f64 parse to infinity and stay strings
        match text.parse::<f64>() {
            Ok(x) if x.is_finite() => return Value::Float(x),
            _ => {}
        }
    }
    if let Some(caps) = QUOTED.captures(text) {
        return Value::String(caps[1].to_string());
    }
    if text.contains(',') {
        return Value::List(split_list(text));
    }
    Value::String(text.to_string())
}

/// Split on commas and trim each element. Empty elements survive only
/// between two non-empty ones.
fn split_list(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let start = parts.iter().position(|p| !p.is_empty()).unwrap_or(parts.len());
    let end = parts.iter().rposition(|p| !p.is_empty()).map_or(start, |i| i + 1);
    parts[start..end].iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_booleans() {
        for text in ["no", "false", "0"] {
            assert_eq!(coerce(text), Value::Bool(false), "{}", text);
        }
        for text in ["yes", "true", "1"] {
            assert_eq!(coerce(text), Value::Bool(true), "{}", text);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(coerce("123"), Value::Integer(123));
        assert_eq!(coerce("2147483648"), Value::Integer(2_147_483_648));
        assert_eq!(coerce("1.23"), Value::Float(1.23));
        assert_eq!(coerce("10"), Value::Integer(10));
    }

    #[test]
    fn test_number_lookalikes_stay_strings() {
        assert_eq!(coerce("+5"), Value::from("+5"));
        assert_eq!(coerce("1e5"), Value::from("1e5"));
        assert_eq!(coerce("1_000"), Value::from("1_000"));
        assert_eq!(coerce(".5"), Value::from(".5"));
        assert_eq!(coerce("1.2.3"), Value::from("1.2.3"));
    }

    #[test]
    fn test_integer_overflow_degrades_to_string() {
        let text = "99999999999999999999999";
        assert_eq!(coerce(text), Value::from(text));
    }

    #[test]
    fn test_float_overflow_degrades_to_string() {
        let text = format!("{}.0", "9".repeat(400));
        assert_eq!(coerce(&text), Value::String(text.clone()));
    }

    #[test]
    fn test_quoted_string_strips_quotes() {
        assert_eq!(coerce("\"hello world\""), Value::from("hello world"));
        assert_eq!(coerce("\"\""), Value::from(""));
    }

    #[test]
    fn test_comma_inside_quotes_is_not_a_list() {
        assert_eq!(coerce("\"a,b\""), Value::from("a,b"));
        assert_eq!(coerce("a,b"), list(&["a", "b"]));
    }

    #[test]
    fn test_list_elements_are_trimmed() {
        assert_eq!(coerce("val1, val2 ,val3"), list(&["val1", "val2", "val3"]));
    }

    #[test]
    fn test_list_keeps_inner_empty_elements_only() {
        assert_eq!(coerce("a,,b"), list(&["a", "", "b"]));
        assert_eq!(coerce("a,b,"), list(&["a", "b"]));
        assert_eq!(coerce(",a"), list(&["a"]));
        assert_eq!(coerce(","), list(&[]));
    }

    #[test]
    fn test_plain_text_is_verbatim() {
        assert_eq!(coerce("some_value"), Value::from("some_value"));
        assert_eq!(coerce("/srv/uploads/"), Value::from("/srv/uploads/"));
    }

    #[test]
    fn test_coerce_is_deterministic() {
        for text in ["1", "1.5", "x,y", "\"q\"", "plain"] {
            assert_eq!(coerce(text), coerce(text));
        }
    }
}
