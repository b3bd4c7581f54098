//! htraction-storage
//!
//! File-backed local key-value store and the values kept in it.

pub mod applied;
pub mod error;
pub mod store;

pub use applied::AppliedInvestors;
pub use error::StorageError;
pub use store::LocalStore;
