//! Input normalization and output formatting.
//!
//! Callers hand in either one string or a sequence of fragments. The shape
//! is decided once here, carried through the pipeline as [`InputShape`], and
//! used again to give the result back in the same shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::char_categories::is_transparent;
use crate::error::FixError;

/// Which shape the caller's input had
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    Text,
    Fragments,
}

/// Text to be fixed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    /// A string whose existing spacing is untrustworthy
    Text(String),
    /// Pieces of words split apart by layout extraction
    Fragments(Vec<String>),
}

/// Flattened input ready for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub shape: InputShape,
}

impl Input {
    pub fn shape(&self) -> InputShape {
        match self {
            Input::Text(_) => InputShape::Text,
            Input::Fragments(_) => InputShape::Fragments,
        }
    }

    /// Flatten into one string: a text loses all of its whitespace, fragments
    /// are concatenated without a separator. Invisible separators such as
    /// U+200B count as whitespace in both shapes.
    pub fn normalize(&self) -> Normalized {
        let text = match self {
            Input::Text(text) => text.chars().filter(|c| !is_transparent(*c)).collect(),
            Input::Fragments(fragments) => fragments
                .iter()
                .flat_map(|f| f.chars())
                .filter(|c| !is_transparent(*c))
                .collect(),
        };
        Normalized {
            text,
            shape: self.shape(),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Vec<String>> for Input {
    fn from(fragments: Vec<String>) -> Self {
        Input::Fragments(fragments)
    }
}

impl From<Vec<&str>> for Input {
    fn from(fragments: Vec<&str>) -> Self {
        Input::Fragments(fragments.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Input {
    fn from(fragments: &[&str]) -> Self {
        Input::Fragments(fragments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(fragments: [&str; N]) -> Self {
        Input::Fragments(fragments.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Value> for Input {
    type Error = FixError;

    /// Accepts a JSON string or an array of strings
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Input::Text(text)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(fragment) => Ok(fragment),
                    other => Err(FixError::InvalidInputShape(format!(
                        "fragment {} is {}, expected a string",
                        i,
                        json_kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Input::Fragments),
            other => Err(FixError::InvalidInputShape(format!(
                "expected a string or an array of strings, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Corrected text in the caller's original shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    /// Words as reconstructed; original fragment boundaries are not kept
    Fragments(Vec<String>),
}

impl Output {
    /// Re-express corrected text in the given shape
    pub fn format(corrected: &str, shape: InputShape) -> Output {
        match shape {
            InputShape::Text => Output::Text(corrected.trim().to_string()),
            InputShape::Fragments => {
                Output::Fragments(corrected.split_whitespace().map(String::from).collect())
            }
        }
    }

    pub fn shape(&self) -> InputShape {
        match self {
            Output::Text(_) => InputShape::Text,
            Output::Fragments(_) => InputShape::Fragments,
        }
    }

    pub fn as_fragments(&self) -> Option<&[String]> {
        match self {
            Output::Text(_) => None,
            Output::Fragments(words) => Some(words),
        }
    }

    /// The output as one string; fragments are joined with single spaces
    pub fn into_text(self) -> String {
        match self {
            Output::Text(text) => text,
            Output::Fragments(words) => words.join(" "),
        }
    }
}

impl From<Output> for Input {
    fn from(output: Output) -> Self {
        match output {
            Output::Text(text) => Input::Text(text),
            Output::Fragments(words) => Input::Fragments(words),
        }
    }
}

impl From<Output> for Value {
    fn from(output: Output) -> Self {
        match output {
            Output::Text(text) => Value::String(text),
            Output::Fragments(words) => Value::Array(words.into_iter().map(Value::String).collect()),
        }
    }
}
