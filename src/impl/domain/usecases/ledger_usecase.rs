use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    domain::{
        logic::ledger_balance_engine::{
            canonicalized_new_entry, canonicalized_patch, LedgerBalanceEngine,
        },
        repositories::ledger_repository::LedgerRepository,
    },
    entities::{LedgerEntry, LedgerEntryId, LedgerEntryPatch, NewLedgerEntry},
};

/// Ledger kept in step with its store: every mutation goes to the store first,
/// then the complete set is fetched again and folded. Nothing is patched
/// locally, so the view is always the fold of the latest full reload.
///
/// If any step fails the error is returned and the current entries stay
/// exactly as they were. There is no retry, timeout or conflict detection; with
/// several concurrent editors the last full reload wins.
///
/// A mutation can reach the store and still return an error, when only the
/// reload after it failed. For `insert` that case is visible through
/// `last_created`: it holds the id the store assigned, so the caller should
/// `reload` instead of inserting again.
#[async_trait]
pub trait LedgerUsecase: Send {
    fn entries(&self) -> &[LedgerEntry];

    /// Id of the most recent entry the store accepted through `insert`, even
    /// if the reload after it failed.
    fn last_created(&self) -> Option<LedgerEntryId>;

    async fn reload(&mut self) -> Result<(), ServerError>;

    async fn insert(&mut self, entry: NewLedgerEntry) -> Result<LedgerEntryId, ServerError>;

    async fn update(&mut self, id: LedgerEntryId, patch: LedgerEntryPatch)
        -> Result<(), ServerError>;

    async fn delete(&mut self, id: LedgerEntryId) -> Result<(), ServerError>;
}

pub struct LedgerUsecaseImpl<R: LedgerRepository> {
    repository: R,
    engine: LedgerBalanceEngine,
    last_created: Option<LedgerEntryId>,
}

impl<R: LedgerRepository> LedgerUsecaseImpl<R> {
    /// Starts empty; call `reload` to fetch the current set.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            engine: LedgerBalanceEngine::new(),
            last_created: None,
        }
    }

    pub fn engine(&self) -> &LedgerBalanceEngine {
        &self.engine
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: LedgerRepository> LedgerUsecase for LedgerUsecaseImpl<R> {
    fn entries(&self) -> &[LedgerEntry] {
        self.engine.entries()
    }

    fn last_created(&self) -> Option<LedgerEntryId> {
        self.last_created
    }

    async fn reload(&mut self) -> Result<(), ServerError> {
        let entries = self.repository.list().await?;
        debug!("reloaded {} ledger entries from store", entries.len());
        self.engine.replace_all(entries);
        Ok(())
    }

    async fn insert(&mut self, entry: NewLedgerEntry) -> Result<LedgerEntryId, ServerError> {
        let id = self
            .repository
            .create(canonicalized_new_entry(entry))
            .await?;
        debug!("stored ledger entry {}", id);
        self.last_created = Some(id);
        self.reload().await?;
        Ok(id)
    }

    async fn update(
        &mut self,
        id: LedgerEntryId,
        patch: LedgerEntryPatch,
    ) -> Result<(), ServerError> {
        self.repository
            .update(id, canonicalized_patch(patch))
            .await?;
        debug!("updated ledger entry {}", id);
        self.reload().await
    }

    async fn delete(&mut self, id: LedgerEntryId) -> Result<(), ServerError> {
        self.repository.delete(id).await?;
        debug!("deleted ledger entry {}", id);
        self.reload().await
    }
}
