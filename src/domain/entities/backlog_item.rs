//! Backlog item entity
//!
//! A backlog item is produced entirely by the language model, so nothing about
//! its shape is guaranteed. Deserialization is lenient: an object always
//! becomes a `BacklogItem`, with missing or wrongly-typed fields falling back
//! to empty values and an unrecognised priority falling back to `Medium`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One structured unit of product work derived from unstructured notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    /// Short, clear title
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// "As a ..., I want ..., so that ..."
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_story: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub tags: Vec<String>,
}

/// Implied urgency of a backlog item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Match a free-form label case-insensitively by substring.
    ///
    /// "Very High" and "high" are both `High`; anything unrecognised is `Medium`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("high") {
            Priority::High
        } else if label.contains("low") {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(label) => Priority::from_label(&label),
            _ => Priority::default(),
        })
    }
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).unwrap_or_default())
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(values) => values.into_iter().filter_map(value_to_string).collect(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}
