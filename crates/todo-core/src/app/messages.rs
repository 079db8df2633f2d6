//! User-facing prompts and messages.

use crate::domain::{ChoiceError, TodoError};

pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
pub const DESCRIPTION_PROMPT: &str = "Enter task description: ";
pub const POSITION_PROMPT: &str = "Enter task number: ";

pub const TASK_ADDED: &str = "Task added successfully.";
pub const TASK_COMPLETED: &str = "Task marked as complete.";
pub const TASK_DELETED: &str = "Task deleted successfully.";
pub const NO_TASKS: &str = "No tasks found.";
pub const INVALID_POSITION: &str = "Invalid task number.";
pub const NOT_A_NUMBER: &str = "Invalid choice. Please enter a number.";
pub const OUT_OF_RANGE: &str = "Invalid choice. Please enter a number between 1 and 5.";
pub const FAREWELL: &str = "Thank you for using the Todo List Application. Goodbye!";

/// Message shown for a recoverable error.
///
/// `None` for `Console`, which is not a user-input condition.
pub fn for_error(err: &TodoError) -> Option<&'static str> {
    match err {
        TodoError::InvalidChoice(ChoiceError::NotANumber) => Some(NOT_A_NUMBER),
        TodoError::InvalidChoice(ChoiceError::OutOfRange) => Some(OUT_OF_RANGE),
        TodoError::InvalidPosition { .. } => Some(INVALID_POSITION),
        TodoError::EmptyList => Some(NO_TASKS),
        TodoError::Console(_) => None,
    }
}
