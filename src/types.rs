//! Core record types persisted by the suite.
//!
//! Field names are part of the on-disk format and must not change:
//! tasks use `title`/`due`/`stat`, sessions use `start_time`/`endTime`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Completion state of a task.
///
/// Stored as the strings `"Pending"` and `"Completed"`. Any other value,
/// including non-strings and null, reads back as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl From<Value> for TaskStatus {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("Completed") => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do entry. Identified only by its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Free-form due date, stored exactly as typed.
    #[serde(default, deserialize_with = "lenient_string")]
    pub due: String,
    #[serde(default)]
    pub stat: TaskStatus,
    /// Fields written by other tools are kept on rewrite.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(title: impl Into<String>, due: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due: due.into(),
            stat: TaskStatus::Pending,
            extra: Map::new(),
        }
    }
}

/// A logged work session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: String,
    /// Never filled in; ending a session is unsupported.
    #[serde(rename = "endTime", default, deserialize_with = "lenient_optional_string")]
    pub end_time: Option<String>,
}

impl Session {
    pub fn started_at(start_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: None,
        }
    }
}

/// Render any JSON scalar as text so hand-edited files still load.
/// Null becomes `None`; strings are taken as-is; anything else is its JSON text.
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}
