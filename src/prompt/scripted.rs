//! Scripted prompt channel
//!
//! Answers prompts from a predefined queue without user interaction and
//! records everything shown. Useful for automation, testing, or CI/CD
//! environments.

use super::interface::PromptChannel;
use crate::error::Result;
use std::collections::VecDeque;

/// Channel that replays queued answers in order.
///
/// An exhausted queue answers with an empty string, so the prompt's default
/// applies.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    responses: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answers given for successive prompts
    pub fn with_responses<I, S>(mut self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses.extend(responses.into_iter().map(Into::into));
        self
    }

    /// Queue one more answer
    pub fn push_response(&mut self, response: &str) {
        self.responses.push_back(response.to_string());
    }

    /// Every prompt presented so far, as displayed
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every informational message written so far
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl PromptChannel for ScriptedChannel {
    fn write(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn read(&mut self, prompt: &str, default: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        let response = self.responses.pop_front().unwrap_or_default();
        log::debug!("Auto-answering prompt '{prompt}' with: '{response}'");

        if response.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_responses_in_order() {
        let mut channel = ScriptedChannel::new().with_responses(["bill", "17"]);

        assert_eq!(channel.read("Name? ():", "").unwrap(), "bill");
        assert_eq!(channel.read("Age? (18):", "18").unwrap(), "17");
        assert_eq!(channel.prompts(), ["Name? ():", "Age? (18):"]);
        assert_eq!(channel.remaining(), 0);
    }

    #[test]
    fn empty_or_exhausted_answers_use_default() {
        let mut channel = ScriptedChannel::new().with_responses([""]);

        assert_eq!(channel.read("Age? (18):", "18").unwrap(), "18");
        assert_eq!(channel.read("Age? (18):", "18").unwrap(), "18");
    }

    #[test]
    fn records_messages() {
        let mut channel = ScriptedChannel::new();
        channel.push_response("x");
        channel.write("hello");

        assert_eq!(channel.messages(), ["hello"]);
        assert_eq!(channel.remaining(), 1);
    }
}
