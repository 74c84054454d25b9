use chrono::NaiveDate;

use super::canonical_amount::CanonicalAmount;

/// Identifier assigned by the backing store. Ledger order follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerEntryId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterpartyId(pub u64);

/// One dated movement: quantity in (credit), quantity out (debit).
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: LedgerEntryId,
    pub date: NaiveDate,
    pub credit: CanonicalAmount,
    pub debit: CanonicalAmount,
    pub credit_unit_price: CanonicalAmount,
    pub debit_unit_price: CanonicalAmount,
    pub counterparty_id: Option<CounterpartyId>,
    /// Only ever written by the balance fold.
    pub(crate) balance: CanonicalAmount,
}

/// An entry not yet stored (no id yet).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    pub date: NaiveDate,
    pub credit: CanonicalAmount,
    pub debit: CanonicalAmount,
    pub credit_unit_price: CanonicalAmount,
    pub debit_unit_price: CanonicalAmount,
    pub counterparty_id: Option<CounterpartyId>,
}

/// Fields to replace on an existing entry. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerEntryPatch {
    pub date: Option<NaiveDate>,
    pub credit: Option<CanonicalAmount>,
    pub debit: Option<CanonicalAmount>,
    pub credit_unit_price: Option<CanonicalAmount>,
    pub debit_unit_price: Option<CanonicalAmount>,
    /// `Some(None)` clears the counterparty.
    pub counterparty_id: Option<Option<CounterpartyId>>,
}

// --

impl std::fmt::Display for LedgerEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl LedgerEntry {
    pub fn new(id: LedgerEntryId, date: NaiveDate, credit: f64, debit: f64) -> Self {
        Self {
            id,
            date,
            credit,
            debit,
            credit_unit_price: 0.0,
            debit_unit_price: 0.0,
            counterparty_id: None,
            balance: 0.0,
        }
    }

    pub fn from_new(id: LedgerEntryId, new: NewLedgerEntry) -> Self {
        Self {
            id,
            date: new.date,
            credit: new.credit,
            debit: new.debit,
            credit_unit_price: new.credit_unit_price,
            debit_unit_price: new.debit_unit_price,
            counterparty_id: new.counterparty_id,
            balance: 0.0,
        }
    }

    pub fn with_unit_prices(mut self, credit_unit_price: f64, debit_unit_price: f64) -> Self {
        self.credit_unit_price = credit_unit_price;
        self.debit_unit_price = debit_unit_price;
        self
    }

    pub fn with_counterparty(mut self, counterparty_id: CounterpartyId) -> Self {
        self.counterparty_id = Some(counterparty_id);
        self
    }

    /// Running balance as of the last recompute of the owning ledger.
    pub fn balance(&self) -> CanonicalAmount {
        self.balance
    }
}

impl NewLedgerEntry {
    pub fn new(date: NaiveDate, credit: f64, debit: f64) -> Self {
        Self {
            date,
            credit,
            debit,
            credit_unit_price: 0.0,
            debit_unit_price: 0.0,
            counterparty_id: None,
        }
    }
}
