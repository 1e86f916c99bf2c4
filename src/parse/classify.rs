//! Line-kind classification.
//!
//! ORDER MATTERS: group headers are tried before settings, settings before
//! comments.

use once_cell::sync::Lazy;
use regex::Regex;

/// `[word]`, optionally followed by a comment.
pub(crate) static GROUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(\w+)\]\s*(?:;.*)?$").expect("valid regex"));

/// Key of letters, `_` and override brackets, then `=`.
static SETTING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z_<>]+\s*=").expect("valid regex"));

static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*;").expect("valid regex"));

/// Kind of a non-blank configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Group,
    Setting,
    Comment,
    Unrecognized,
}

pub fn classify(line: &str) -> LineKind {
    if GROUP_PATTERN.is_match(line) {
        LineKind::Group
    } else if SETTING_PATTERN.is_match(line) {
        LineKind::Setting
    } else if COMMENT_PATTERN.is_match(line) {
        LineKind::Comment
    } else {
        LineKind::Unrecognized
    }
}
