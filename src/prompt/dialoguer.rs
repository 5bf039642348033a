//! Dialoguer-based implementation of the prompt channel
//!
//! Used for interactive terminal sessions.

use super::interface::PromptChannel;
use crate::error::Result;
use dialoguer::console::Term;
use dialoguer::Input;

/// Terminal backend built on `dialoguer::Input`.
pub struct DialoguerChannel;

impl DialoguerChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptChannel for DialoguerChannel {
    fn write(&mut self, message: &str) {
        // a closed terminal only loses the message
        if let Err(e) = Term::stdout().write_line(message) {
            log::debug!("Could not write to the terminal: {e}");
        }
    }

    fn read(&mut self, prompt: &str, default: &str) -> Result<String> {
        // dialoguer's theme appends its own separator after the prompt
        let input = Input::<String>::new()
            .with_prompt(prompt.trim_end_matches(':'))
            .allow_empty(true)
            .interact_text()?;

        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }
}
