//! Pure interface for prompting without external dependencies
//!
//! This is the only seam between the question logic and a concrete
//! interactive backend.

use crate::error::Result;

/// A two-operation channel to the operator.
pub trait PromptChannel {
    /// Emit an informational line. A dead sink drops the message.
    fn write(&mut self, message: &str);

    /// Present `prompt` and return the raw input, or `default` when the
    /// input was empty.
    fn read(&mut self, prompt: &str, default: &str) -> Result<String>;
}

impl<C: PromptChannel + ?Sized> PromptChannel for Box<C> {
    fn write(&mut self, message: &str) {
        (**self).write(message)
    }

    fn read(&mut self, prompt: &str, default: &str) -> Result<String> {
        (**self).read(prompt, default)
    }
}
