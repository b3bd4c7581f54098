use serde::{Deserialize, Serialize};
use uuid::Uuid;

use htraction_core::models::form::{Entry, EntryValue, FormGroup};

use crate::Questionnaire;
use crate::answers::{Answer, AnswerMap};
use crate::error::FormError;

/// Answers handed off by a finished wizard. Keys are the questionnaire's
/// question ids; absent keys mean unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub questionnaire_id: String,
    pub answers: AnswerMap,
    pub submitted_at: jiff::Timestamp,
}

impl Submission {
    /// Reshape the answers into report input: one group per section, entries
    /// in question order, unanswered questions left out.
    pub fn to_form_groups(&self, questionnaire: &dyn Questionnaire) -> Vec<FormGroup> {
        questionnaire
            .sections()
            .iter()
            .map(|section| FormGroup {
                group_id: format!("{}-{}", self.id, section.id),
                group_name: section.title.clone(),
                entries: section
                    .questions
                    .iter()
                    .filter_map(|q| {
                        let value = match self.answers.get(&q.id)? {
                            Answer::Text(text) => EntryValue::Scalar(text.clone()),
                            Answer::Choices(items) => EntryValue::StringList(items.clone()),
                        };
                        Some(Entry::new(q.id.clone(), q.prompt.clone(), value))
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }
}
