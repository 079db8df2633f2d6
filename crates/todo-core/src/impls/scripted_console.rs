//! ScriptedConsole - in-memory console that replays canned input.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::domain::TodoError;
use crate::ports::Console;

/// Console fed from a fixed list of input lines.
///
/// Every prompt and printed line is recorded in `transcript` in the order it
/// happened. Once the script runs out, `prompt` reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Prompts and printed lines, interleaved.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Printed lines only (no prompts).
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn prompt(&mut self, text: &str) -> Result<Option<String>, TodoError> {
        self.transcript.push(text.to_string());
        Ok(self.input.pop_front())
    }

    async fn say(&mut self, line: &str) -> Result<(), TodoError> {
        self.transcript.push(line.to_string());
        self.output.push(line.to_string());
        Ok(())
    }
}
