use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use htraction_core::models::chat::{ChatMessage, ChatRole};

use crate::assistant;
use crate::error::ChatError;
use crate::responder::{CannedResponder, Responder};

/// One chat session. Opens with the assistant greeting as message 1; every
/// accepted user message is followed by exactly one assistant reply.
#[derive(Debug, Serialize)]
pub struct Conversation<R = CannedResponder> {
    id: Uuid,
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    responder: R,
}

impl Conversation<CannedResponder> {
    /// A conversation with the built-in investor assistant.
    pub fn investor() -> Self {
        Self::new(assistant::GREETING, assistant::investor_assistant())
    }

    /// Merge replies from a `CannedResponder` JSON document after the
    /// existing ones. Returns how many keywords it carried.
    pub fn extend_responses(&mut self, json: &str) -> Result<usize, ChatError> {
        let extra = CannedResponder::from_json(json)?;
        let count = extra.responses().len();
        self.responder.extend(extra.responses().iter().cloned())?;
        Ok(count)
    }
}

impl<R: Responder> Conversation<R> {
    pub fn new(greeting: &str, responder: R) -> Self {
        let id = Uuid::new_v4();
        info!(conversation_id = %id, "conversation started");
        let mut conversation = Self {
            id,
            messages: Vec::new(),
            responder,
        };
        conversation.push(ChatRole::Assistant, greeting.to_string());
        conversation
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    pub fn responder_mut(&mut self) -> &mut R {
        &mut self.responder
    }

    /// Record the user's message and the assistant's reply. Blank input is
    /// ignored and yields `None`.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        let reply = self.responder.respond(input);
        self.push(ChatRole::User, input.to_string());
        self.push(ChatRole::Assistant, reply);
        self.messages.last()
    }

    fn push(&mut self, role: ChatRole, content: String) {
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: jiff::Timestamp::now(),
        });
    }
}
