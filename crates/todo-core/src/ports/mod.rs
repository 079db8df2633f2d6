//! Ports - seams between the core and the outside world.
//!
//! The session never touches stdin/stdout directly; it talks to a `Console`.
//! The binary supplies a terminal-backed implementation, tests use
//! `impls::ScriptedConsole`.

pub mod console;

pub use self::console::Console;
