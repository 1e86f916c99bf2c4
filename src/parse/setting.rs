//! Character-level scanner for setting lines.
//!
//! A setting line is split into key, value text and override label by a small
//! state machine over three flags. Whitespace outside quotes is dropped, `;`
//! outside quotes starts a comment. Quotes protect only `;` and whitespace;
//! the quote characters themselves stay in the value for [`coerce`] to strip.

use crate::domain::Rule;
use crate::error::{ConfigError, ConfigResult, SyntaxKind};
use crate::parse::value::coerce;

const COMMENT: char = ';';
const QUOTE: char = '"';
const OVERRIDE_OPEN: char = '<';
const OVERRIDE_CLOSE: char = '>';
const ASSIGN: char = '=';

/// Whether scanning continues after a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Scanner state: mode flags plus the three accumulating buffers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub in_override: bool,
    pub in_value: bool,
    pub in_quoted: bool,
    pub key: String,
    pub value: String,
    pub label: String,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one character.
    pub fn step(&mut self, c: char) -> Step {
        if c == COMMENT {
            if !self.in_quoted {
                return Step::Stop;
            }
            self.value.push(c);
        } else if c == QUOTE {
            self.in_quoted = !self.in_quoted;
            self.value.push(c);
        } else if c.is_whitespace() {
            // insignificant outside quotes, data inside them
            if self.in_quoted {
                self.value.push(c);
            }
        } else if c == OVERRIDE_OPEN {
            self.in_override = true;
        } else if c == OVERRIDE_CLOSE {
            self.in_override = false;
        } else if c == ASSIGN && !self.in_value {
            self.in_value = true;
        } else if self.in_override {
            self.label.push(c);
        } else if self.in_value {
            self.value.push(c);
        } else {
            self.key.push(c);
        }
        Step::Continue
    }

    /// Validate the finished scan and build the rule.
    pub fn finish(self, line: usize) -> ConfigResult<Rule> {
        if self.key.is_empty() {
            return Err(ConfigError::syntax(line, SyntaxKind::MissingKey));
        }
        if self.value.is_empty() {
            return Err(ConfigError::syntax(line, SyntaxKind::MissingValue));
        }
        if self.in_quoted {
            return Err(ConfigError::syntax(line, SyntaxKind::UnterminatedString));
        }
        Ok(Rule::Setting { key: self.key, value: coerce(&self.value), override_label: self.label })
    }
}

/// Scan a setting line into a [`Rule::Setting`]. `line` is the 1-based line
/// number reported on failure.
pub fn scan_setting(text: &str, line: usize) -> ConfigResult<Rule> {
    let mut state = ScanState::new();
    for c in text.chars() {
        if state.step(c) == Step::Stop {
            break;
        }
    }
    state.finish(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    fn scan(text: &str) -> Rule {
        scan_setting(text, 1).expect("valid setting")
    }

    fn scan_err(text: &str, line: usize) -> ConfigError {
        scan_setting(text, line).expect_err("invalid setting")
    }

    #[test]
    fn test_whitespace_outside_quotes_is_ignored() {
        let expected = Rule::setting("name", Value::from("alice"), "");
        assert_eq!(scan("name = alice"), expected);
        assert_eq!(scan("name=alice"), expected);
        assert_eq!(scan("name     =  alice"), expected);
        assert_eq!(scan("  name\t= alice  "), expected);
    }

    #[test]
    fn test_comment_truncates_line() {
        assert_eq!(scan("name = alice; hello"), scan("name = alice"));
        assert_eq!(scan("name = alice ;= other"), scan("name = alice"));
    }

    #[test]
    fn test_semicolon_inside_quotes_is_data() {
        assert_eq!(scan("msg = \"hey;hi\""), Rule::setting("msg", Value::from("hey;hi"), ""));
    }

    #[test]
    fn test_whitespace_inside_quotes_is_kept() {
        let rule = scan("name = \"hello there, ftp uploading\"");
        assert_eq!(rule, Rule::setting("name", Value::from("hello there, ftp uploading"), ""));
    }

    #[test]
    fn test_override_label_extraction() {
        assert_eq!(scan("name<first> = alice"), Rule::setting("name", Value::from("alice"), "first"));
        assert_eq!(
            scan("path<staging> = /srv/uploads/; This is another comment"),
            Rule::setting("path", Value::from("/srv/uploads/"), "staging")
        );
    }

    #[test]
    fn test_only_first_equals_starts_value() {
        assert_eq!(scan("expr = a=b"), Rule::setting("expr", Value::from("a=b"), ""));
    }

    #[test]
    fn test_override_markers_apply_inside_quotes() {
        // only `;` and whitespace are protected by quotes
        assert_eq!(scan("tag = \"<b>\""), Rule::setting("tag", Value::from(""), "b"));
        assert_eq!(scan("tag = \"x<b>y\""), Rule::setting("tag", Value::from("xy"), "b"));
    }

    #[test]
    fn test_value_is_coerced() {
        assert_eq!(scan("enabled = no"), Rule::setting("enabled", Value::Bool(false), ""));
        assert_eq!(scan("limit = 26214400"), Rule::setting("limit", Value::Integer(26_214_400), ""));
        assert_eq!(
            scan("params = array, of, values"),
            Rule::setting(
                "params",
                Value::List(vec!["array".into(), "of".into(), "values".into()]),
                ""
            )
        );
    }

    #[test]
    fn test_plain_setting_has_no_label_and_no_whitespace_in_key() {
        if let Rule::Setting { key, override_label, .. } = scan(" some_key  = v") {
            assert_eq!(key, "some_key");
            assert!(override_label.is_empty());
        } else {
            panic!("expected setting");
        }
    }

    #[test]
    fn test_missing_equals_fails() {
        let err = scan_err("some random string", 4);
        assert_eq!(err.to_string(), "Parse error in line 4");
        assert!(matches!(err, ConfigError::Syntax { kind: SyntaxKind::MissingValue, .. }));
    }

    #[test]
    fn test_semicolon_before_equals_fails() {
        let err = scan_err("name ;= value", 2);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let err = scan_err("name = \"hello", 9);
        assert_eq!(err.to_string(), "Parse error in line 9");
        assert!(matches!(err, ConfigError::Syntax { kind: SyntaxKind::UnterminatedString, .. }));
    }

    #[test]
    fn test_missing_key_fails() {
        let err = scan_err("= value", 1);
        assert!(matches!(err, ConfigError::Syntax { kind: SyntaxKind::MissingKey, .. }));
    }

    #[test]
    fn test_step_transitions() {
        let mut state = ScanState::new();
        for c in "k<l>".chars() {
            assert_eq!(state.step(c), Step::Continue);
        }
        assert_eq!((state.key.as_str(), state.label.as_str()), ("k", "l"));
        assert!(!state.in_override);
        assert_eq!(state.step('='), Step::Continue);
        assert!(state.in_value);
        assert_eq!(state.step('"'), Step::Continue);
        assert!(state.in_quoted);
        assert_eq!(state.step(';'), Step::Continue);
        assert_eq!(state.step('"'), Step::Continue);
        assert_eq!(state.step(';'), Step::Stop);
        assert_eq!(state.value, "\";\"");
    }
}
