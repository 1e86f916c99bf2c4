//! Rule building: classify each line and parse it into a rule.

use crate::domain::{LocatedRule, Rule};
use crate::error::{ConfigError, ConfigResult, SyntaxKind};
use crate::parse::classify::{classify, LineKind, GROUP_PATTERN};
use crate::parse::setting::scan_setting;

/// Extract the group name from a line already classified as a group header.
pub fn parse_group(text: &str, line: usize) -> ConfigResult<Rule> {
    // The classifier used the same pattern, so a miss here is a classifier bug
    // rather than bad input. Report it as a syntax error instead of panicking.
    match GROUP_PATTERN.captures(text) {
        Some(caps) => Ok(Rule::Group { name: caps[1].to_string() }),
        None => {
            tracing::error!(line, "group header passed classification but did not match");
            Err(ConfigError::syntax(line, SyntaxKind::Unrecognized))
        }
    }
}

/// Parse one non-blank line. Comments yield `Ok(None)`.
pub fn generate_rule(text: &str, line: usize) -> ConfigResult<Option<Rule>> {
    match classify(text) {
        LineKind::Group => parse_group(text, line).map(Some),
        LineKind::Setting => scan_setting(text, line).map(Some),
        LineKind::Comment => Ok(None),
        LineKind::Unrecognized => Err(ConfigError::syntax(line, SyntaxKind::Unrecognized)),
    }
}

/// Parse numbered lines into rules, in input order.
///
/// Blank lines and comments produce no rule. The first bad line aborts the
/// whole parse.
pub fn parse_lines<I, S>(lines: I) -> ConfigResult<Vec<LocatedRule>>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    let mut rules = Vec::new();
    for (line, text) in lines {
        let text = text.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        if let Some(rule) = generate_rule(text, line)? {
            tracing::trace!(line, ?rule, "parsed rule");
            rules.push(LocatedRule { line, rule });
        }
    }
    tracing::debug!(rules = rules.len(), "parsed configuration lines");
    Ok(rules)
}

/// Number the lines of `source` from 1.
pub fn numbered_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines().enumerate().map(|(idx, text)| (idx + 1, text))
}
