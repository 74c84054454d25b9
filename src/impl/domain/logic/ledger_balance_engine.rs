use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{CanonicalAmount, LedgerEntry, LedgerEntryId, LedgerEntryPatch, NewLedgerEntry},
    errors::{DuplicateLedgerEntryId, LedgerEntryNotFound},
};

use super::utils::round2;

/// Ordered ledger entries with running balances.
///
/// After every successful mutation the entries are sorted by id and all
/// balances are folded again from scratch, so the result depends only on the
/// current set of entries and never on the order mutations arrived in. A
/// failed mutation leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct LedgerBalanceEngine {
    entries: Vec<LedgerEntry>,
}

impl LedgerBalanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries: recompute_ledger(entries),
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn get(&self, id: LedgerEntryId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Balance after the last entry (zero for an empty ledger).
    pub fn closing_balance(&self) -> CanonicalAmount {
        self.entries.last().map_or(0.0, |entry| entry.balance)
    }

    /// Adds an entry whose id was assigned by the store. Any balance it carries
    /// is ignored.
    pub fn insert(&mut self, entry: LedgerEntry) -> Result<(), ServerError> {
        if self.get(entry.id).is_some() {
            return Err(DuplicateLedgerEntryId::new(entry.id.0));
        }
        self.entries.push(canonicalized(entry));
        self.recompute();
        Ok(())
    }

    /// Replaces fields of an entry in place; its id does not change.
    pub fn update(&mut self, id: LedgerEntryId, patch: &LedgerEntryPatch) -> Result<(), ServerError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| LedgerEntryNotFound::new(id.0))?;
        apply_patch(entry, patch);
        self.recompute();
        Ok(())
    }

    pub fn delete(&mut self, id: LedgerEntryId) -> Result<LedgerEntry, ServerError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| LedgerEntryNotFound::new(id.0))?;
        let removed = self.entries.remove(position);
        self.recompute();
        Ok(removed)
    }

    /// Swaps in a complete, store-confirmed set of entries.
    pub fn replace_all(&mut self, entries: Vec<LedgerEntry>) {
        self.entries = recompute_ledger(entries);
    }

    pub fn recompute(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = recompute_ledger(entries);
    }
}

/// Sorts by id (ties keep their given order) and folds the running balance:
/// `balance[i] = balance[i-1] + credit[i] - debit[i]`, starting from zero.
pub fn recompute_ledger(entries: Vec<LedgerEntry>) -> Vec<LedgerEntry> {
    let mut entries: Vec<LedgerEntry> = entries.into_iter().map(canonicalized).collect();
    entries.sort_by_key(|entry| entry.id);
    let closing = entries.iter_mut().fold(0.0, |running, entry| {
        entry.balance = round2(running + entry.credit - entry.debit);
        entry.balance
    });
    debug!(
        "recomputed ledger balances: {} entries, closing balance {:.2}",
        entries.len(),
        closing
    );
    entries
}

impl LedgerEntry {
    /// Credit quantity times its unit price.
    pub fn credit_value(&self) -> CanonicalAmount {
        round2(self.credit * self.credit_unit_price)
    }

    /// Debit quantity times its unit price.
    pub fn debit_value(&self) -> CanonicalAmount {
        round2(self.debit * self.debit_unit_price)
    }
}

fn canonicalized(entry: LedgerEntry) -> LedgerEntry {
    LedgerEntry {
        credit: round2(entry.credit),
        debit: round2(entry.debit),
        credit_unit_price: round2(entry.credit_unit_price),
        debit_unit_price: round2(entry.debit_unit_price),
        ..entry
    }
}

pub(crate) fn canonicalized_new_entry(entry: NewLedgerEntry) -> NewLedgerEntry {
    NewLedgerEntry {
        credit: round2(entry.credit),
        debit: round2(entry.debit),
        credit_unit_price: round2(entry.credit_unit_price),
        debit_unit_price: round2(entry.debit_unit_price),
        ..entry
    }
}

pub(crate) fn canonicalized_patch(patch: LedgerEntryPatch) -> LedgerEntryPatch {
    LedgerEntryPatch {
        credit: patch.credit.map(round2),
        debit: patch.debit.map(round2),
        credit_unit_price: patch.credit_unit_price.map(round2),
        debit_unit_price: patch.debit_unit_price.map(round2),
        ..patch
    }
}

fn apply_patch(entry: &mut LedgerEntry, patch: &LedgerEntryPatch) {
    if let Some(date) = patch.date {
        entry.date = date;
    }
    if let Some(credit) = patch.credit {
        entry.credit = round2(credit);
    }
    if let Some(debit) = patch.debit {
        entry.debit = round2(debit);
    }
    if let Some(price) = patch.credit_unit_price {
        entry.credit_unit_price = round2(price);
    }
    if let Some(price) = patch.debit_unit_price {
        entry.debit_unit_price = round2(price);
    }
    if let Some(counterparty_id) = patch.counterparty_id {
        entry.counterparty_id = counterparty_id;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(id: u64, credit: f64, debit: f64) -> LedgerEntry {
        let date = NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap();
        LedgerEntry::new(LedgerEntryId(id), date, credit, debit)
    }

    fn balances(entries: &[LedgerEntry]) -> Vec<f64> {
        entries.iter().map(|e| e.balance()).collect()
    }

    fn ids(entries: &[LedgerEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn folds_credit_minus_debit() {
        let ledger = recompute_ledger(vec![entry(1, 100.0, 0.0), entry(2, 0.0, 40.0)]);
        assert_eq!(balances(&ledger), vec![100.0, 60.0]);
    }

    #[test]
    fn insert_recomputes_regardless_of_arrival_order() {
        let mut engine = LedgerBalanceEngine::new();
        engine.insert(entry(3, 10.0, 0.0)).unwrap();
        engine.insert(entry(1, 100.0, 0.0)).unwrap();
        engine.insert(entry(2, 0.0, 40.0)).unwrap();
        assert_eq!(ids(engine.entries()), vec![1, 2, 3]);
        assert_eq!(balances(engine.entries()), vec![100.0, 60.0, 70.0]);
        assert_eq!(engine.closing_balance(), 70.0);
    }

    #[test]
    fn order_depends_only_on_ids() {
        let forward = recompute_ledger(vec![entry(1, 5.0, 0.0), entry(2, 0.0, 2.5), entry(7, 1.0, 1.0)]);
        let shuffled = recompute_ledger(vec![entry(7, 1.0, 1.0), entry(1, 5.0, 0.0), entry(2, 0.0, 2.5)]);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn recompute_is_idempotent() {
        let once = recompute_ledger(vec![entry(2, 0.1, 0.0), entry(1, 0.2, 0.0), entry(3, 0.0, 0.3)]);
        let twice = recompute_ledger(once.clone());
        assert_eq!(once, twice);
        assert_eq!(balances(&once), vec![0.2, 0.3, 0.0]);
    }

    #[test]
    fn every_balance_extends_the_previous_one() {
        let ledger = recompute_ledger(vec![
            entry(4, 12.34, 0.0),
            entry(1, 1000.0, 250.5),
            entry(3, 0.0, 99.99),
            entry(2, 0.01, 0.0),
        ]);
        let mut previous = 0.0;
        for e in &ledger {
            assert_eq!(e.balance(), round2(previous + e.credit - e.debit));
            previous = e.balance();
        }
    }

    #[test]
    fn stale_balances_are_ignored() {
        let mut stale = entry(1, 10.0, 0.0);
        stale.balance = 999.0;
        let ledger = recompute_ledger(vec![stale]);
        assert_eq!(ledger[0].balance(), 10.0);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut engine = LedgerBalanceEngine::from_entries(vec![
            entry(1, 100.0, 0.0),
            entry(2, 0.0, 40.0),
            entry(3, 10.0, 0.0),
        ]);
        engine
            .update(
                LedgerEntryId(2),
                &LedgerEntryPatch {
                    debit: Some(50.0),
                    counterparty_id: Some(Some(crate::entities::CounterpartyId(9))),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(ids(engine.entries()), vec![1, 2, 3]);
        assert_eq!(balances(engine.entries()), vec![100.0, 50.0, 60.0]);
        assert_eq!(
            engine.get(LedgerEntryId(2)).unwrap().counterparty_id,
            Some(crate::entities::CounterpartyId(9))
        );
    }

    #[test]
    fn delete_recomputes_following_balances() {
        let mut engine = LedgerBalanceEngine::from_entries(vec![
            entry(1, 100.0, 0.0),
            entry(2, 0.0, 40.0),
            entry(3, 10.0, 0.0),
        ]);
        let removed = engine.delete(LedgerEntryId(2)).unwrap();
        assert_eq!(removed.id, LedgerEntryId(2));
        assert_eq!(balances(engine.entries()), vec![100.0, 110.0]);
    }

    #[test]
    fn failed_mutations_leave_ledger_untouched() {
        let mut engine =
            LedgerBalanceEngine::from_entries(vec![entry(1, 100.0, 0.0), entry(2, 0.0, 40.0)]);
        let before = engine.entries().to_vec();

        assert!(engine.insert(entry(2, 1.0, 0.0)).is_err());
        assert!(engine
            .update(LedgerEntryId(5), &LedgerEntryPatch { credit: Some(1.0), ..Default::default() })
            .is_err());
        assert!(engine.delete(LedgerEntryId(5)).is_err());

        assert_eq!(engine.entries(), before.as_slice());
    }

    #[test]
    fn amounts_are_canonicalized_on_entry() {
        let mut engine = LedgerBalanceEngine::new();
        engine.insert(entry(1, 10.005, 0.0)).unwrap();
        assert_eq!(engine.entries()[0].credit, 10.01);
        assert_eq!(engine.closing_balance(), 10.01);
    }

    #[test]
    fn movement_values_use_unit_prices() {
        let e = entry(1, 3.0, 2.0).with_unit_prices(1.335, 10.0);
        let ledger = recompute_ledger(vec![e]);
        // Unit price canonicalized to 1.34 first.
        assert_eq!(ledger[0].credit_value(), 4.02);
        assert_eq!(ledger[0].debit_value(), 20.0);
    }

    #[test]
    fn empty_ledger_has_zero_closing_balance() {
        assert_eq!(LedgerBalanceEngine::new().closing_balance(), 0.0);
        assert!(recompute_ledger(vec![]).is_empty());
    }
}
