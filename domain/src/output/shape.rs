//! Structural checks on parsed model replies
//!
//! Parsing only proves the reply is JSON. A model can still answer with
//! `{"items": [...]}` or drop the `answer` field. [`check_shape`] lists such
//! problems; [`ShapeCheck`] decides what the caller does with them.

use super::kind::OutputKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do when a parsed reply does not match the requested shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeCheck {
    /// Skip the check entirely
    Off,
    /// Log problems and forward the reply anyway
    #[default]
    Warn,
    /// Treat problems as malformed output
    Reject,
}

impl std::str::FromStr for ShapeCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(ShapeCheck::Off),
            "warn" => Ok(ShapeCheck::Warn),
            "reject" => Ok(ShapeCheck::Reject),
            other => Err(format!("unknown shape check '{}'", other)),
        }
    }
}

/// A single structural problem in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeIssue {
    NotAnObject,
    MissingKey(&'static str),
    NotAnArray(&'static str),
    NotAString(String),
    ItemNotAnObject(usize),
}

impl std::fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeIssue::NotAnObject => write!(f, "reply is not a JSON object"),
            ShapeIssue::MissingKey(key) => write!(f, "missing key '{}'", key),
            ShapeIssue::NotAnArray(key) => write!(f, "'{}' is not an array", key),
            ShapeIssue::NotAString(path) => write!(f, "'{}' is not a string", path),
            ShapeIssue::ItemNotAnObject(i) => write!(f, "questions[{}] is not an object", i),
        }
    }
}

/// List every structural problem of `value` relative to `kind`.
pub fn check_shape(value: &Value, kind: OutputKind) -> Vec<ShapeIssue> {
    let Some(object) = value.as_object() else {
        return vec![ShapeIssue::NotAnObject];
    };

    let key = kind.root_key();
    let Some(root) = object.get(key) else {
        return vec![ShapeIssue::MissingKey(key)];
    };

    match kind {
        OutputKind::Explanation => {
            if root.is_string() {
                vec![]
            } else {
                vec![ShapeIssue::NotAString(key.to_string())]
            }
        }
        OutputKind::Questions => {
            let Some(items) = root.as_array() else {
                return vec![ShapeIssue::NotAnArray(key)];
            };
            let mut issues = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let Some(pair) = item.as_object() else {
                    issues.push(ShapeIssue::ItemNotAnObject(i));
                    continue;
                };
                for field in ["question", "answer"] {
                    if !pair.get(field).is_some_and(Value::is_string) {
                        issues.push(ShapeIssue::NotAString(format!("questions[{}].{}", i, field)));
                    }
                }
            }
            issues
        }
    }
}
