use std::collections::HashMap;

use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::datasources::{
        locale_ron_datasource::{LocaleRonDatasource as _, LocaleRonDatasourceImpl},
        records_json_datasource::{RecordsJsonDatasource as _, RecordsJsonDatasourceImpl},
    },
    domain::logic::{
        binary_payload_codec, derived_field_graph, ledger_balance_engine,
        number_codec::NumberCodec,
    },
    entities::{
        CanonicalAmount, CounterpartyId, DerivedCharges, LedgerEntry, NumberLocale, PhotoDisplay,
        RawCharges, StorageEncoding, StoredDerivedRecord,
    },
    presentation::ledger_csv_printer::LedgerCsvPrinter,
};

/// Entry point for the application: amount text, derived charges, ledger
/// balances and photo payloads, all under one number locale.
pub struct LedgerCoreUtil {
    codec: NumberCodec,
    records_datasource: RecordsJsonDatasourceImpl,
}

impl Default for LedgerCoreUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerCoreUtil {
    /// Uses the default locale (1.234,56).
    pub fn new() -> Self {
        Self {
            codec: NumberCodec::default(),
            records_datasource: RecordsJsonDatasourceImpl::new(),
        }
    }

    pub fn with_locale(locale: NumberLocale) -> Result<Self, ServerError> {
        Ok(Self {
            codec: NumberCodec::new(locale)?,
            records_datasource: RecordsJsonDatasourceImpl::new(),
        })
    }

    pub async fn from_locale_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let locale = LocaleRonDatasourceImpl::new().from_file(path).await?;
        Self::with_locale(locale)
    }

    pub fn codec(&self) -> &NumberCodec {
        &self.codec
    }

    // Amounts.
    // ---

    pub fn parse_localized(&self, text: &str) -> CanonicalAmount {
        self.codec.parse_localized(text)
    }

    pub fn try_parse_localized(&self, text: &str) -> Result<CanonicalAmount, ServerError> {
        self.codec.try_parse_localized(text)
    }

    pub fn format_localized(&self, amount: CanonicalAmount) -> String {
        self.codec.format_localized(amount)
    }

    pub fn format_currency(&self, amount: CanonicalAmount) -> String {
        self.codec.format_currency(amount)
    }

    // Derived charges.
    // ---

    pub fn compute_derived(&self, raw: &RawCharges) -> DerivedCharges {
        derived_field_graph::compute_derived(raw)
    }

    /// Reads a JSON list of charge records; derived outputs are recomputed.
    pub fn derived_records_from_json(
        &self,
        json: &str,
    ) -> Result<Vec<StoredDerivedRecord>, ServerError> {
        self.records_datasource.derived_records_from_string(json)
    }

    pub fn derived_records_to_json(
        &self,
        records: &[StoredDerivedRecord],
    ) -> Result<String, ServerError> {
        self.records_datasource.derived_records_to_string(records)
    }

    // Ledger.
    // ---

    pub fn recompute_ledger(&self, entries: Vec<LedgerEntry>) -> Vec<LedgerEntry> {
        ledger_balance_engine::recompute_ledger(entries)
    }

    /// Reads a JSON list of ledger entries and folds their balances.
    pub fn ledger_from_json(&self, json: &str) -> Result<Vec<LedgerEntry>, ServerError> {
        let entries = self.records_datasource.ledger_entries_from_string(json)?;
        Ok(ledger_balance_engine::recompute_ledger(entries))
    }

    pub fn ledger_to_json(&self, entries: &[LedgerEntry]) -> Result<String, ServerError> {
        self.records_datasource.ledger_entries_to_string(entries)
    }

    /// CSV of the recomputed ledger, amounts in this locale.
    pub fn export_ledger_csv(
        &self,
        entries: Vec<LedgerEntry>,
        counterparty_names: &HashMap<CounterpartyId, String>,
    ) -> Result<String, ServerError> {
        let ledger = ledger_balance_engine::recompute_ledger(entries);
        LedgerCsvPrinter::new(&self.codec).print_ledger(&ledger, counterparty_names)
    }

    // Photos.
    // ---

    pub fn decode_photo(&self, raw: &Value) -> PhotoDisplay {
        binary_payload_codec::decode_photo(raw)
    }

    pub fn encode_photo(&self, data_url: &str) -> String {
        binary_payload_codec::encode_photo(data_url)
    }

    pub fn encode_photo_as(
        &self,
        data_url: &str,
        encoding: StorageEncoding,
    ) -> Result<String, ServerError> {
        binary_payload_codec::encode_photo_as(data_url, encoding)
    }
}
