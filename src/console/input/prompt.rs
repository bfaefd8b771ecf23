use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::MoveSource;

/// Reads positions from the terminal, with line editing and history.
pub struct PromptInput {
    editor: DefaultEditor,
}

impl PromptInput {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl MoveSource for PromptInput {
    type ErrorKind = ReadlineError;

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::ErrorKind> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                debug!("prompt closed by the player");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
