use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{LedgerEntry, LedgerEntryId, LedgerEntryPatch, NewLedgerEntry};

/// The store holding the authoritative ledger, usually a REST resource
/// supplied by the application.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// The complete entry set. Balances in it are ignored.
    async fn list(&self) -> Result<Vec<LedgerEntry>, ServerError>;

    /// Stores a new entry and returns the id the store assigned.
    async fn create(&self, entry: NewLedgerEntry) -> Result<LedgerEntryId, ServerError>;

    async fn update(&self, id: LedgerEntryId, patch: LedgerEntryPatch) -> Result<(), ServerError>;

    async fn delete(&self, id: LedgerEntryId) -> Result<(), ServerError>;
}
