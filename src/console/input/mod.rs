mod prompt;
mod scripted;

pub use prompt::PromptInput;
pub use scripted::ScriptedInput;
