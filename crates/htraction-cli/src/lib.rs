//! htraction-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise them
//! without going through the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod prompts;
