//! Override resolution and the resolved, read-only configuration tree.

use crate::domain::{NestedConfig, Value, DEFAULT_LABEL};
use crate::error::{ConfigError, ConfigResult, LookupError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved settings of one group.
pub type ResolvedGroup = BTreeMap<String, Value>;

/// Final configuration: group → key → value.
///
/// Built once by [`resolve`] and never mutated afterwards, so it can be
/// shared freely between threads for reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    groups: BTreeMap<String, ResolvedGroup>,
}

impl ResolvedConfig {
    /// Look up a value, failing with [`LookupError`] when the group or key is
    /// absent.
    pub fn get(&self, group: &str, key: &str) -> Result<&Value, LookupError> {
        let entries = self
            .groups
            .get(group)
            .ok_or_else(|| LookupError::UnknownGroup { group: group.to_string() })?;
        entries.get(key).ok_or_else(|| LookupError::UnknownKey {
            group: group.to_string(),
            key: key.to_string(),
        })
    }

    /// Like [`get`](Self::get), but absence is `None`.
    pub fn try_get(&self, group: &str, key: &str) -> Option<&Value> {
        self.groups.get(group)?.get(key)
    }

    pub fn group(&self, name: &str) -> Option<&ResolvedGroup> {
        self.groups.get(name)
    }

    pub fn contains(&self, group: &str, key: &str) -> bool {
        self.try_get(group, key).is_some()
    }

    /// Groups in name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &ResolvedGroup)> {
        self.groups.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Collapse `nested` into a [`ResolvedConfig`].
///
/// `overrides` are in ascending priority; `default` sits below all of them.
/// For each key the value under the highest-priority label present wins, and
/// labels a key does not define are skipped.
pub fn resolve<S: AsRef<str>>(nested: &NestedConfig, overrides: &[S]) -> ConfigResult<ResolvedConfig> {
    let mut groups = BTreeMap::new();
    for (group, entries) in nested {
        let mut resolved = ResolvedGroup::new();
        for (key, values) in entries {
            let base = values.get(DEFAULT_LABEL).ok_or_else(|| ConfigError::MissingDefault {
                group: group.clone(),
                key: key.clone(),
            })?;
            let value = overrides
                .iter()
                .rev()
                .find_map(|label| values.get(label.as_ref()))
                .unwrap_or(base);
            resolved.insert(key.clone(), value.clone());
        }
        groups.insert(group.clone(), resolved);
    }
    Ok(ResolvedConfig { groups })
}
