//! Keyword-based reply lookup.
//!
//! Input is lowercased and checked against each keyword (also lowercased) in
//! insertion order. The first keyword contained anywhere in the input picks
//! the reply; when none matches, the fallback is returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatError;

/// Produces the assistant's reply to one user message.
pub trait Responder: Send + Sync {
    fn respond(&self, input: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    pub keyword: String,
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponder {
    fallback: String,
    #[serde(default)]
    responses: Vec<CannedResponse>,
}

impl CannedResponder {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            responses: Vec::new(),
        }
    }

    /// Build from fixed keyword/reply pairs known to be non-empty.
    pub(crate) fn from_pairs(fallback: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            fallback: fallback.to_string(),
            responses: pairs
                .iter()
                .map(|(keyword, reply)| CannedResponse {
                    keyword: keyword.to_lowercase(),
                    reply: (*reply).to_string(),
                })
                .collect(),
        }
    }

    /// Append a keyword. Earlier keywords take precedence.
    pub fn with_response(
        mut self,
        keyword: impl Into<String>,
        reply: impl Into<String>,
    ) -> Result<Self, ChatError> {
        self.push(keyword.into(), reply.into())?;
        Ok(self)
    }

    /// Load a responder from JSON:
    /// `{ "fallback": "...", "responses": [{ "keyword": "...", "reply": "..." }] }`.
    pub fn from_json(json: &str) -> Result<Self, ChatError> {
        let parsed: CannedResponder = serde_json::from_str(json)?;
        let mut responder = CannedResponder::new(parsed.fallback);
        responder.extend(parsed.responses)?;
        Ok(responder)
    }

    /// Append more responses after the existing ones. A keyword that is
    /// already present keeps its original reply.
    pub fn extend(
        &mut self,
        responses: impl IntoIterator<Item = CannedResponse>,
    ) -> Result<(), ChatError> {
        for response in responses {
            self.push(response.keyword, response.reply)?;
        }
        Ok(())
    }

    fn push(&mut self, keyword: String, reply: String) -> Result<(), ChatError> {
        if keyword.trim().is_empty() {
            return Err(ChatError::EmptyKeyword);
        }
        let keyword = keyword.to_lowercase();
        if self.responses.iter().any(|r| r.keyword == keyword) {
            debug!(keyword = %keyword, "keyword already registered, keeping first reply");
            return Ok(());
        }
        self.responses.push(CannedResponse { keyword, reply });
        Ok(())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn responses(&self) -> &[CannedResponse] {
        &self.responses
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(|r| r.keyword.as_str())
    }

    /// The matching canned response, if any keyword occurs in `input`.
    pub fn lookup(&self, input: &str) -> Option<&CannedResponse> {
        let lowered = input.to_lowercase();
        self.responses
            .iter()
            .find(|r| lowered.contains(r.keyword.as_str()))
    }
}

impl Responder for CannedResponder {
    fn respond(&self, input: &str) -> String {
        match self.lookup(input) {
            Some(found) => {
                debug!(keyword = %found.keyword, "canned reply");
                found.reply.clone()
            }
            None => {
                debug!("no keyword matched, using fallback");
                self.fallback.clone()
            }
        }
    }
}
