use crate::entities::{CounterpartyId, LedgerEntry, LedgerEntryId};

use super::{iso_date_model::ISODateModel, stored_amount_model::StoredAmountModel};

/// Ledger entry as exchanged with the store. An incoming `balance` is read but
/// never trusted; outgoing records carry the freshly folded one.
#[derive(Debug, serde_derive::Deserialize, serde_derive::Serialize)]
pub(crate) struct LedgerEntryModel {
    pub id: u64,
    pub date: ISODateModel,
    #[serde(default)]
    pub credit: StoredAmountModel,
    #[serde(default)]
    pub debit: StoredAmountModel,
    #[serde(default, alias = "creditUnitPrice")]
    pub credit_unit_price: StoredAmountModel,
    #[serde(default, alias = "debitUnitPrice")]
    pub debit_unit_price: StoredAmountModel,
    #[serde(default, alias = "counterpartyId")]
    pub counterparty_id: Option<u64>,
    #[serde(default)]
    pub balance: Option<StoredAmountModel>,
}

impl Into<LedgerEntry> for LedgerEntryModel {
    fn into(self) -> LedgerEntry {
        LedgerEntry {
            id: LedgerEntryId(self.id),
            date: self.date.into(),
            credit: self.credit.into(),
            debit: self.debit.into(),
            credit_unit_price: self.credit_unit_price.into(),
            debit_unit_price: self.debit_unit_price.into(),
            counterparty_id: self.counterparty_id.map(CounterpartyId),
            balance: 0.0,
        }
    }
}

impl From<&LedgerEntry> for LedgerEntryModel {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            id: entry.id.0,
            date: ISODateModel(entry.date),
            credit: StoredAmountModel(entry.credit),
            debit: StoredAmountModel(entry.debit),
            credit_unit_price: StoredAmountModel(entry.credit_unit_price),
            debit_unit_price: StoredAmountModel(entry.debit_unit_price),
            counterparty_id: entry.counterparty_id.map(|c| c.0),
            balance: Some(StoredAmountModel(entry.balance())),
        }
    }
}
