//! Operator interaction
//!
//! The module is structured in layers:
//! - `interface`: the abstract `PromptChannel`, independent of any UI library
//! - `dialoguer`: interactive terminal backend using the dialoguer library
//! - `stream`: relay backend over any reader/writer pair
//! - `scripted`: queued answers for tests and automation
//!
//! `Prompt` sits on top of a channel and owns the required-answer retry loop.

use crate::{
    constants::{messages, MAX_ASKS},
    error::{Error, Result},
};

pub mod dialoguer;
pub mod interface;
pub mod scripted;
pub mod stream;

pub use self::dialoguer::DialoguerChannel;
pub use interface::PromptChannel;
pub use scripted::ScriptedChannel;
pub use stream::StreamChannel;

/// Formats the prompt shown to the operator, e.g. `Age? (18):`.
pub fn display_prompt(prompt: &str, default: &str) -> String {
    format!("{prompt} ({default}):")
}

/// Asks questions through a channel, re-asking required ones.
pub struct Prompt<C> {
    channel: C,
}

impl<C: PromptChannel> Prompt<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Emit an informational message.
    pub fn out(&mut self, message: &str) {
        self.channel.write(message);
    }

    /// Read one answer, showing the default alongside the prompt.
    pub fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        self.channel.read(&display_prompt(prompt, default), default)
    }

    /// Ask the question `name` until it gets a usable answer.
    ///
    /// An empty answer is accepted unless `required` is set, in which case
    /// the operator gets [`MAX_ASKS`] attempts in total before
    /// [`Error::AskFailed`] is returned.
    pub fn ask(
        &mut self,
        name: &str,
        prompt: &str,
        default: &str,
        required: bool,
    ) -> Result<String> {
        for attempt in 1..=MAX_ASKS {
            let response = self.input(prompt, default)?;

            if !required || !response.is_empty() {
                log::debug!("Answer for '{name}' accepted on attempt {attempt}");
                return Ok(response);
            }

            self.out(messages::RESPONSE_REQUIRED);
        }

        Err(Error::AskFailed { name: name.to_string(), attempts: MAX_ASKS })
    }
}
