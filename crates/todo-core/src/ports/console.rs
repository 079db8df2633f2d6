//! Console port - line-oriented prompt/print interface.

use async_trait::async_trait;

use crate::domain::TodoError;

/// Line-oriented terminal used by the session.
///
/// # Contract
/// - `prompt` shows `text` without a trailing newline and reads one line.
///   The returned line has its line terminator stripped. `Ok(None)` means
///   the input is closed (EOF).
/// - `say` prints one full line.
#[async_trait]
pub trait Console: Send {
    async fn prompt(&mut self, text: &str) -> Result<Option<String>, TodoError>;

    async fn say(&mut self, line: &str) -> Result<(), TodoError>;
}
