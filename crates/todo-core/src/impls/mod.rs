//! Impls - `Console` implementations shipped with the core.
//!
//! The terminal-backed console lives in `todo-cli`.

pub mod scripted_console;

pub use self::scripted_console::ScriptedConsole;
