use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A single raw sale row as read from the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Wall-clock time of the sale (any UTC offset from the store is dropped)
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Sale amount
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
}

impl SaleRecord {
    pub fn new(timestamp: NaiveDateTime, amount: f64) -> Self {
        Self { timestamp, amount }
    }

    /// Calendar date of the sale, time-of-day discarded
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Parse a store timestamp into its wall-clock date-time.
///
/// Accepts RFC 3339 (`2024-01-02T10:00:00+00:00`), Postgres text output
/// (`2024-01-02 10:00:00.123+00`), naive date-times with `T` or space, and bare dates.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(AppError::Parse(format!("Invalid timestamp: '{}'", raw)))
}

/// Parse a store amount, tolerating numeric strings
pub fn parse_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AppError::Parse(format!("Invalid amount '{}': {}", raw, e)))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

// PostgREST renders `numeric` columns as JSON numbers, but strings show up
// when the column is typed as text or through some proxies.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(s) => parse_amount(&s).map_err(serde::de::Error::custom),
    }
}
