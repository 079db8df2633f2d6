//! Task: a description plus a completion flag.

use serde::Serialize;
use std::fmt;

/// Presentation status of a task.
///
/// Displayed as `Complete` / `Incomplete`, serialized in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Complete,
    Incomplete,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Complete => "Complete",
            TaskStatus::Incomplete => "Incomplete",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item.
///
/// The description is fixed at creation and stored verbatim (no trimming,
/// empty text allowed). `completed` only ever moves from false to true.
/// A task has no identity of its own: it is addressed by its position in
/// the owning `TaskList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    description: String,
    completed: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Complete
        } else {
            TaskStatus::Incomplete
        }
    }

    /// Mark as complete. Calling this again is a no-op.
    pub(crate) fn mark_complete(&mut self) {
        self.completed = true;
    }
}
