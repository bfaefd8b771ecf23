use std::collections::VecDeque;
use std::convert::Infallible;

use crate::MoveSource;

/// Replays a fixed list of lines, then reports the input as closed.
///
/// Every prompt it was shown is kept, so callers can check what a player
/// would have seen.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveSource for ScriptedInput {
    type ErrorKind = Infallible;

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::ErrorKind> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
