//! Core data types shared by the parser, assembler and resolver

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Label under which the non-overridden value of a key is stored.
pub const DEFAULT_LABEL: &str = "default";

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<String>),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            // Debug keeps the decimal point on whole floats ("2.0", not "2")
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// One structural rule parsed from a configuration line.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// `[name]` header opening a group.
    Group { name: String },
    /// `key<label> = value`. An empty `override_label` means no override.
    Setting { key: String, value: Value, override_label: String },
}

impl Rule {
    pub fn setting(key: impl Into<String>, value: Value, override_label: impl Into<String>) -> Self {
        Rule::Setting { key: key.into(), value, override_label: override_label.into() }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Rule::Group { name: name.into() }
    }
}

/// A rule together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRule {
    pub line: usize,
    pub rule: Rule,
}

/// Values of one key, by override label. Always contains [`DEFAULT_LABEL`]
/// once assembled.
pub type LabeledValues = BTreeMap<String, Value>;

/// Keys of one group.
pub type GroupEntries = BTreeMap<String, LabeledValues>;

/// group → key → override label → value, before override resolution.
pub type NestedConfig = BTreeMap<String, GroupEntries>;
