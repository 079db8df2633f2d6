//! TaskList: the ordered collection of tasks for one session.

use std::fmt;
use std::iter::Enumerate;
use std::slice;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Task, TaskStatus, TodoError};

/// Ordered, mutable sequence of tasks addressed by 1-based position.
///
/// Design:
/// - Insertion order is presentation order.
/// - Positions are always `1..=len`; deleting closes the gap, so every later
///   task moves down by one. There are no stable IDs.
/// - The list owns its tasks exclusively; `delete` hands the removed task back.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 1-based position, if any.
    pub fn get(&self, position: usize) -> Option<&Task> {
        self.resolve(position).map(|index| &self.tasks[index])
    }

    /// Append a new incomplete task. Never fails; the description is kept as-is.
    pub fn add(&mut self, description: impl Into<String>) -> &Task {
        self.tasks.push(Task::new(description));
        debug!(position = self.tasks.len(), "task added");
        &self.tasks[self.tasks.len() - 1]
    }

    /// Lazy view over `(position, description, status)`.
    ///
    /// Returns `Listing::Empty` when there is nothing to show, so callers can
    /// tell "no tasks" apart from a populated result without an error.
    pub fn list(&self) -> Listing<'_> {
        if self.tasks.is_empty() {
            Listing::Empty
        } else {
            Listing::Tasks(Entries {
                inner: self.tasks.iter().enumerate(),
            })
        }
    }

    /// Mark the task at `position` as complete.
    ///
    /// Completing an already-complete task succeeds and changes nothing.
    pub fn complete(&mut self, position: usize) -> Result<&Task, TodoError> {
        let index = self.resolve_checked(position)?;
        self.tasks[index].mark_complete();
        debug!(position, "task completed");
        Ok(&self.tasks[index])
    }

    /// Remove the task at `position`, shifting later tasks down by one.
    pub fn delete(&mut self, position: usize) -> Result<Task, TodoError> {
        let index = self.resolve_checked(position)?;
        let task = self.tasks.remove(index);
        debug!(position, remaining = self.tasks.len(), "task deleted");
        Ok(task)
    }

    /// Map a 1-based position to a 0-based index, `None` outside `[1, len]`.
    fn resolve(&self, position: usize) -> Option<usize> {
        let index = position.checked_sub(1)?;
        (index < self.tasks.len()).then_some(index)
    }

    /// Shared bounds check for `complete` and `delete`.
    fn resolve_checked(&self, position: usize) -> Result<usize, TodoError> {
        if self.tasks.is_empty() {
            return Err(TodoError::EmptyList);
        }
        self.resolve(position).ok_or(TodoError::InvalidPosition {
            position,
            len: self.tasks.len(),
        })
    }
}

/// Result of `TaskList::list`.
#[derive(Debug, Clone)]
pub enum Listing<'a> {
    Empty,
    Tasks(Entries<'a>),
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn entries(self) -> Option<Entries<'a>> {
        match self {
            Listing::Empty => None,
            Listing::Tasks(entries) => Some(entries),
        }
    }
}

/// Iterator over list entries. Clone it to walk the same listing again.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Task>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = ListEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, task)| ListEntry {
            position: index + 1,
            description: task.description(),
            status: task.status(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// One line of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    pub position: usize,
    pub description: &'a str,
    pub status: TaskStatus,
}

impl fmt::Display for ListEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {}", self.position, self.description, self.status)
    }
}
