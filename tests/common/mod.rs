#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use stable_ledger_core::{
    entities::{LedgerEntry, LedgerEntryId, LedgerEntryPatch, NewLedgerEntry},
    errors::{LedgerEntryNotFound, ReadError},
    repositories::LedgerRepository,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// Store double: assigns increasing ids and can be told to fail one call.
pub struct InMemoryLedgerRepository {
    state: Mutex<State>,
}

struct State {
    entries: Vec<LedgerEntry>,
    next_id: u64,
    fail_next: Option<Operation>,
    calls: Vec<Operation>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                entries: Vec::new(),
                next_id: 1,
                fail_next: None,
                calls: Vec::new(),
            }),
        }
    }

    /// Seeds entries as if another editor had written them.
    pub fn seed(&self, entries: Vec<LedgerEntry>) {
        let mut state = self.state.lock().unwrap();
        for entry in entries {
            state.next_id = state.next_id.max(entry.id.0 + 1);
            state.entries.push(entry);
        }
    }

    pub fn fail_next(&self, operation: Operation) {
        self.state.lock().unwrap().fail_next = Some(operation);
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, operation: Operation) -> Result<std::sync::MutexGuard<'_, State>, ServerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(operation);
        if state.fail_next == Some(operation) {
            state.fail_next = None;
            return Err(ReadError::new());
        }
        Ok(state)
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn list(&self) -> Result<Vec<LedgerEntry>, ServerError> {
        let state = self.record(Operation::List)?;
        // Newest first, the way the list endpoint sorts.
        Ok(state.entries.iter().rev().cloned().collect())
    }

    async fn create(&self, entry: NewLedgerEntry) -> Result<LedgerEntryId, ServerError> {
        let mut state = self.record(Operation::Create)?;
        let id = LedgerEntryId(state.next_id);
        state.next_id += 1;
        state.entries.push(LedgerEntry::from_new(id, entry));
        Ok(id)
    }

    async fn update(&self, id: LedgerEntryId, patch: LedgerEntryPatch) -> Result<(), ServerError> {
        let mut state = self.record(Operation::Update)?;
        let entry = state
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerEntryNotFound::new(id.0))?;
        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(credit) = patch.credit {
            entry.credit = credit;
        }
        if let Some(debit) = patch.debit {
            entry.debit = debit;
        }
        if let Some(price) = patch.credit_unit_price {
            entry.credit_unit_price = price;
        }
        if let Some(price) = patch.debit_unit_price {
            entry.debit_unit_price = price;
        }
        if let Some(counterparty_id) = patch.counterparty_id {
            entry.counterparty_id = counterparty_id;
        }
        Ok(())
    }

    async fn delete(&self, id: LedgerEntryId) -> Result<(), ServerError> {
        let mut state = self.record(Operation::Delete)?;
        let before = state.entries.len();
        state.entries.retain(|e| e.id != id);
        if state.entries.len() == before {
            return Err(LedgerEntryNotFound::new(id.0));
        }
        Ok(())
    }
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

pub fn balances(entries: &[LedgerEntry]) -> Vec<f64> {
    entries.iter().map(|e| e.balance()).collect()
}

pub fn ids(entries: &[LedgerEntry]) -> Vec<u64> {
    entries.iter().map(|e| e.id.0).collect()
}
