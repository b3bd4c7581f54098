use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("canned response keyword must not be empty")]
    EmptyKeyword,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
