//! Menu choices offered by the interactive session.

use std::fmt;
use std::str::FromStr;

use crate::domain::{ChoiceError, TodoError};

pub const MENU_TITLE: &str = "Todo List Application";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    AddTask,
    CompleteTask,
    ListTasks,
    DeleteTask,
    Quit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddTask,
        MenuChoice::CompleteTask,
        MenuChoice::ListTasks,
        MenuChoice::DeleteTask,
        MenuChoice::Quit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddTask => 1,
            MenuChoice::CompleteTask => 2,
            MenuChoice::ListTasks => 3,
            MenuChoice::DeleteTask => 4,
            MenuChoice::Quit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddTask => "Add Task",
            MenuChoice::CompleteTask => "Mark Task as Complete",
            MenuChoice::ListTasks => "List Tasks",
            MenuChoice::DeleteTask => "Delete Task",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Parse a menu selection typed by the user.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer is
    /// `NotANumber`; an integer outside `1..=5` is `OutOfRange`, including
    /// integers too large for `i64`.
    pub fn parse(input: &str) -> Result<Self, TodoError> {
        let input = input.trim();
        let n: i64 = input.parse().map_err(|_| {
            if is_integer(input) {
                TodoError::InvalidChoice(ChoiceError::OutOfRange)
            } else {
                TodoError::InvalidChoice(ChoiceError::NotANumber)
            }
        })?;
        Self::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == n)
            .ok_or(TodoError::InvalidChoice(ChoiceError::OutOfRange))
    }

    /// Menu lines: title, then one `"{n}. {label}"` line per choice.
    pub fn menu_lines() -> impl Iterator<Item = String> {
        std::iter::once(MENU_TITLE.to_string()).chain(Self::ALL.into_iter().map(|c| c.to_string()))
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
