//! todo-core
//!
//! Core building blocks for the interactive todo list.
//!
//! # Modules
//! - **domain**: domain model (Task, TaskStatus, errors)
//! - **list**: the ordered, position-addressed `TaskList`
//! - **menu**: menu choices and menu-input parsing
//! - **ports**: the `Console` seam between the session and the terminal
//! - **impls**: `Console` implementations that live in the core (scripted, for tests)
//! - **app**: the interaction loop (`Session`) and its user-facing messages

pub mod domain;
pub mod list;
pub mod menu;
pub mod ports;
pub mod impls;
pub mod app;

pub use app::{Session, SessionEnd};
pub use domain::{ChoiceError, Task, TaskStatus, TodoError};
pub use list::{Entries, ListEntry, Listing, TaskList};
pub use menu::MenuChoice;
pub use ports::Console;
