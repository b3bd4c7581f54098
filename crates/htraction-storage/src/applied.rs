//! Investors the founder has applied to, kept under
//! [`APPLIED_INVESTORS`](htraction_core::storage_keys::APPLIED_INVESTORS) as
//! a JSON array of ids in application order.

use tracing::{info, warn};

use htraction_core::models::investor::InvestorId;
use htraction_core::storage_keys::APPLIED_INVESTORS;

use crate::error::StorageError;
use crate::store::LocalStore;

#[derive(Debug, Clone, Copy)]
pub struct AppliedInvestors<'a> {
    store: &'a LocalStore,
}

impl<'a> AppliedInvestors<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// Applied ids in the order they were added. A stored value that is not
    /// a list of ids is logged and read as empty; the next
    /// [`mark_applied`](Self::mark_applied) overwrites it.
    pub fn list(&self) -> Result<Vec<InvestorId>, StorageError> {
        let Some(raw) = self.store.get_raw(APPLIED_INVESTORS)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_value(raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(key = APPLIED_INVESTORS, error = %e, "ignoring malformed applied investors list");
                Ok(Vec::new())
            }
        }
    }

    pub fn is_applied(&self, id: InvestorId) -> Result<bool, StorageError> {
        Ok(self.list()?.contains(&id))
    }

    /// Append `id` unless it is already present. Returns whether it was
    /// added.
    pub fn mark_applied(&self, id: InvestorId) -> Result<bool, StorageError> {
        let mut ids = self.list()?;
        if ids.contains(&id) {
            return Ok(false);
        }
        ids.push(id);
        self.store.set(APPLIED_INVESTORS, &ids)?;
        info!(investor = %id, total = ids.len(), "investor marked as applied");
        Ok(true)
    }
}
