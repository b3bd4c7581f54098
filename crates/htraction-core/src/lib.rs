//! htraction-core
//!
//! Pure domain types shared by every htraction crate: form groups and their
//! typed values, scores, investor ids, thesis configuration, chat messages,
//! and local storage key conventions. No I/O lives here.

pub mod error;
pub mod models;
pub mod storage_keys;
