//! Fold parsed rules into the nested group → key → label map.

use crate::domain::{LocatedRule, NestedConfig, Rule, DEFAULT_LABEL};
use crate::error::{ConfigError, ConfigResult, SyntaxKind};

/// Build a [`NestedConfig`] from rules in file order.
///
/// Settings belong to the most recent group header. An override must follow
/// the default value of its key.
pub fn assemble(rules: &[LocatedRule]) -> ConfigResult<NestedConfig> {
    let mut map = NestedConfig::new();
    let mut current: Option<&str> = None;

    for LocatedRule { line, rule } in rules {
        match rule {
            Rule::Group { name } => {
                if map.insert(name.clone(), Default::default()).is_some() {
                    tracing::warn!(line, group = %name, "group redeclared, earlier settings dropped");
                }
                current = Some(name.as_str());
            }
            Rule::Setting { key, value, override_label } => {
                let group = current
                    .and_then(|g| map.get_mut(g))
                    .ok_or_else(|| ConfigError::syntax(*line, SyntaxKind::SettingOutsideGroup))?;

                if override_label.is_empty() {
                    let values = group.entry(key.clone()).or_default();
                    if values.insert(DEFAULT_LABEL.to_string(), value.clone()).is_some() {
                        tracing::debug!(line, key = %key, "default value replaced");
                    }
                } else {
                    let values = group
                        .get_mut(key)
                        .filter(|values| values.contains_key(DEFAULT_LABEL))
                        .ok_or_else(|| {
                            ConfigError::syntax(
                                *line,
                                SyntaxKind::OverrideWithoutDefault {
                                    key: key.clone(),
                                    label: override_label.clone(),
                                },
                            )
                        })?;
                    values.insert(override_label.clone(), value.clone());
                }
            }
        }
    }

    tracing::debug!(groups = map.len(), "assembled configuration");
    Ok(map)
}
