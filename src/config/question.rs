//! Question definitions and the ordered registry holding them

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Represents a single question asked during a run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// Variable name, also the key written to the env file
    pub name: String,
    /// Prompt text to display to the user
    pub prompt: String,
    /// Answer used when the operator submits nothing
    #[serde(default, deserialize_with = "deserialize_text")]
    pub default: String,
    /// Whether an empty answer is rejected
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub required: bool,
}

impl Question {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self { name: name.into(), prompt: prompt.into(), default: String::new(), required: false }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Reads a scalar record field as text: numbers and booleans are
/// stringified, null is empty. Lists and maps have no text form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads a bool-like record field, as written by hand in YAML or JSON.
pub fn bool_like(value: &Value) -> Option<bool> {
    match value {
        Value::Null => Some(false),
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "" | "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value).ok_or_else(|| D::Error::custom("expected a string, number or boolean"))
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    bool_like(&value).ok_or_else(|| D::Error::custom("expected a boolean"))
}

/// Questions keyed by name, in registration order.
///
/// Registering a name twice replaces the earlier definition in place: the
/// last registration wins and keeps the first one's position.
#[derive(Debug, Default, Clone)]
pub struct QuestionRegistry {
    questions: IndexMap<String, Question>,
}

impl QuestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `question`, replacing any earlier one with the same name.
    pub fn register(&mut self, question: Question) -> Result<()> {
        if question.name.is_empty() {
            return Err(Error::MissingQuestionField {
                index: self.questions.len(),
                field: "name".to_string(),
            });
        }

        if let Some(previous) = self.questions.insert(question.name.clone(), question) {
            log::debug!("Question '{}' was registered again, replacing it", previous.name);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.questions.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.questions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
