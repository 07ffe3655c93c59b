use serde::{Deserialize, Serialize};

/// One free-text journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    /// Display-formatted date, opaque to the engine.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

impl JournalEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            content: content.into(),
        }
    }
}

/// A todo item. Only `completed` feeds the productivity analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }
}
