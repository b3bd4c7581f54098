use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown questionnaire '{id}' (available: {})", available.join(", "))]
    UnknownQuestionnaire { id: String, available: Vec<String> },

    #[error("questionnaire '{0}' has no sections")]
    EmptyQuestionnaire(String),

    #[error("question '{question_id}' appears more than once in questionnaire '{questionnaire_id}'")]
    DuplicateQuestion {
        questionnaire_id: String,
        question_id: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
