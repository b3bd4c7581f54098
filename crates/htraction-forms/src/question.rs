use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How a question is answered. Choice lists live on the variants that use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum InputKind {
    /// Single-line free text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// Free text with a numeric input affordance. Not enforced.
    Numeric,
    /// Exactly one of `options`.
    SingleSelect { options: Vec<String> },
    /// Any subset of `options`, toggled one at a time.
    MultiSelect { options: Vec<String> },
}

impl InputKind {
    pub fn single_select(options: &[&str]) -> Self {
        InputKind::SingleSelect {
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn multi_select(options: &[&str]) -> Self {
        InputKind::MultiSelect {
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Choice list, empty for free-text kinds.
    pub fn options(&self) -> &[String] {
        match self {
            InputKind::SingleSelect { options } | InputKind::MultiSelect { options } => options,
            _ => &[],
        }
    }
}

/// A single question within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Stable key under which the answer is stored and later reported.
    pub id: String,
    pub prompt: String,
    pub input: InputKind,
}

impl Question {
    pub fn new(id: &str, prompt: &str, input: InputKind) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            input,
        }
    }

    pub fn text(id: &str, prompt: &str) -> Self {
        Self::new(id, prompt, InputKind::ShortText)
    }

    pub fn long_text(id: &str, prompt: &str) -> Self {
        Self::new(id, prompt, InputKind::LongText)
    }

    pub fn numeric(id: &str, prompt: &str) -> Self {
        Self::new(id, prompt, InputKind::Numeric)
    }

    pub fn yes_no(id: &str, prompt: &str) -> Self {
        Self::new(id, prompt, InputKind::single_select(&["Yes", "No"]))
    }
}

/// An ordered group of questions shown together as one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(id: &str, title: &str, description: &str, questions: Vec<Question>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            questions,
        }
    }
}

/// A problem with a stored answer, found by [`crate::Questionnaire::validate_answers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerIssue {
    pub question_id: String,
    pub message: String,
}
