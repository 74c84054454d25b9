use fractic_server_error::{CriticalError, ServerError};

use crate::{
    data::models::{derived_record_model::DerivedRecordModel, ledger_entry_model::LedgerEntryModel},
    entities::{LedgerEntry, StoredDerivedRecord},
    errors::InvalidJson,
};

/// Reads and writes the JSON bodies of the store's list endpoints.
pub(crate) trait RecordsJsonDatasource {
    fn ledger_entries_from_string(&self, s: &str) -> Result<Vec<LedgerEntry>, ServerError>;
    fn ledger_entries_to_string(&self, entries: &[LedgerEntry]) -> Result<String, ServerError>;
    fn derived_records_from_string(&self, s: &str)
        -> Result<Vec<StoredDerivedRecord>, ServerError>;
    fn derived_records_to_string(
        &self,
        records: &[StoredDerivedRecord],
    ) -> Result<String, ServerError>;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn ledger_entries_from_string(&self, s: &str) -> Result<Vec<LedgerEntry>, ServerError> {
        let models: Vec<LedgerEntryModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("ledger entries", &e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn ledger_entries_to_string(&self, entries: &[LedgerEntry]) -> Result<String, ServerError> {
        let models: Vec<LedgerEntryModel> = entries.iter().map(LedgerEntryModel::from).collect();
        serde_json::to_string(&models)
            .map_err(|e| CriticalError::with_debug("failed to serialize ledger entries", &e))
    }

    fn derived_records_from_string(
        &self,
        s: &str,
    ) -> Result<Vec<StoredDerivedRecord>, ServerError> {
        let models: Vec<DerivedRecordModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("charge records", &e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn derived_records_to_string(
        &self,
        records: &[StoredDerivedRecord],
    ) -> Result<String, ServerError> {
        let models: Vec<DerivedRecordModel> =
            records.iter().map(DerivedRecordModel::from).collect();
        serde_json::to_string(&models)
            .map_err(|e| CriticalError::with_debug("failed to serialize charge records", &e))
    }
}
