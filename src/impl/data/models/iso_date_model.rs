use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidIsoDate;

/// A calendar date as the store sends it: `2024-03-01`, or a full timestamp
/// (`2024-03-01T00:00:00.000Z`) of which only the date is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ISODateModel(pub NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .map(ISODateModel)
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ISODateModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.format("%Y-%m-%d").to_string())
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
