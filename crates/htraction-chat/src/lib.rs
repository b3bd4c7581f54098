//! htraction-chat
//!
//! Canned investor assistant: keyword lookup and conversation bookkeeping.

pub mod assistant;
pub mod conversation;
pub mod error;
pub mod responder;

pub use conversation::Conversation;
pub use responder::{CannedResponder, Responder};
