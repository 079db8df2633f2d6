//! App - the interactive session that drives a `TaskList` through a `Console`.

pub mod messages;
pub mod session;

pub use self::session::{Session, SessionEnd};
