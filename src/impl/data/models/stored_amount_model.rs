use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::{Deserialize, Serialize};

use crate::{domain::logic::utils::round2, errors::InvalidStoredAmount};

/// Amount as the store sends it: a JSON number, or machine-formatted text
/// (`numeric` columns usually arrive as `"1234.50"`). Always canonical once
/// parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct StoredAmountModel(pub f64);

impl FromStr for StoredAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(StoredAmountModel(0.0));
        }
        let amount = trimmed
            .parse::<f64>()
            .map_err(|e| InvalidStoredAmount::with_debug(trimmed, &e))?;
        if !amount.is_finite() {
            return Err(InvalidStoredAmount::new(trimmed));
        }
        Ok(StoredAmountModel(round2(amount)))
    }
}

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for StoredAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<StoredAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Option::<WireAmount>::deserialize(deserializer)? {
            None => Ok(StoredAmountModel(0.0)),
            Some(WireAmount::Number(n)) => Ok(StoredAmountModel(round2(n))),
            Some(WireAmount::Text(s)) => {
                StoredAmountModel::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    }
}

impl Serialize for StoredAmountModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(round2(self.0))
    }
}

impl Into<f64> for StoredAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
