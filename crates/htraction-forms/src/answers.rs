use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A raw answer as entered. Text covers short/long/numeric/single-select
/// questions; multi-select questions hold their toggled choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    Text(String),
    Choices(Vec<String>),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::Choices(_) => None,
        }
    }

    /// Single-line rendering: text as-is, choices joined with `", "`.
    pub fn display(&self) -> String {
        match self {
            Answer::Text(s) => s.clone(),
            Answer::Choices(items) => items.join(", "),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(items: Vec<String>) -> Self {
        Answer::Choices(items)
    }
}

/// Answers keyed by question id. Keys are plain ids, not references into the
/// questionnaire, so unknown ids can be stored and are simply not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerMap(BTreeMap<String, Answer>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Insert or replace the answer for `question_id`.
    pub fn upsert(&mut self, question_id: impl Into<String>, answer: impl Into<Answer>) {
        self.0.insert(question_id.into(), answer.into());
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.0.remove(question_id)
    }

    /// Flip `choice` in the multi-select answer for `question_id`. Returns
    /// whether the choice is selected afterwards. Removing the last choice
    /// removes the answer altogether.
    pub fn toggle_choice(&mut self, question_id: &str, choice: &str) -> bool {
        let mut choices = match self.0.remove(question_id) {
            Some(Answer::Choices(items)) => items,
            Some(Answer::Text(text)) if !text.is_empty() => vec![text],
            _ => Vec::new(),
        };

        let selected = if let Some(pos) = choices.iter().position(|c| c == choice) {
            choices.remove(pos);
            false
        } else {
            choices.push(choice.to_string());
            true
        };

        if !choices.is_empty() {
            self.0.insert(question_id.to_string(), Answer::Choices(choices));
        }
        selected
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
