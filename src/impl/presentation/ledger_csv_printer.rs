use std::collections::HashMap;

use fractic_server_error::{CriticalError, ServerError};

use crate::{
    domain::logic::number_codec::NumberCodec,
    entities::{CounterpartyId, LedgerEntry},
    errors::CsvWriteFailed,
};

use super::utils::counterparty_label;

const HEADER: [&str; 8] = [
    "id",
    "date",
    "counterparty",
    "credit",
    "debit",
    "credit_unit_price",
    "debit_unit_price",
    "balance",
];

pub(crate) struct LedgerCsvPrinter<'a> {
    codec: &'a NumberCodec,
}

impl<'a> LedgerCsvPrinter<'a> {
    pub(crate) fn new(codec: &'a NumberCodec) -> Self {
        Self { codec }
    }

    /// One row per entry, in the order given (callers pass a recomputed
    /// ledger). Amounts use the codec's locale.
    pub(crate) fn print_ledger(
        &self,
        entries: &[LedgerEntry],
        counterparty_names: &HashMap<CounterpartyId, String>,
    ) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| CsvWriteFailed::with_debug(&e))?;
        for entry in entries {
            writer
                .write_record([
                    entry.id.to_string(),
                    entry.date.format("%Y-%m-%d").to_string(),
                    counterparty_label(entry.counterparty_id, counterparty_names),
                    self.codec.format_localized(entry.credit),
                    self.codec.format_localized(entry.debit),
                    self.codec.format_localized(entry.credit_unit_price),
                    self.codec.format_localized(entry.debit_unit_price),
                    self.codec.format_localized(entry.balance()),
                ])
                .map_err(|e| CsvWriteFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvWriteFailed::with_debug(e.error()))?;
        String::from_utf8(bytes)
            .map_err(|e| CriticalError::with_debug("ledger CSV is not valid UTF-8", &e))
    }
}
