use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single message in an assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    /// Position in the conversation, starting at 1.
    pub id: u32,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Assistant,
}
