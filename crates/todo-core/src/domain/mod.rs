//! Domain model (tasks, statuses, errors).

pub mod errors;
pub mod task;

pub use self::errors::{ChoiceError, TodoError};
pub use self::task::{Task, TaskStatus};
