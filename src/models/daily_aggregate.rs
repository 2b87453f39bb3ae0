use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total sales for one calendar date
///
/// Serialized as `{"date": "YYYY-MM-DD", "amount": ...}` for the trends endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,

    #[serde(rename = "amount")]
    pub total_amount: f64,
}

impl DailyAggregate {
    pub fn new(date: NaiveDate, total_amount: f64) -> Self {
        Self { date, total_amount }
    }
}
