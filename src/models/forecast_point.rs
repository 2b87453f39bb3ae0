use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected day of revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,

    /// Projected amount, rounded to cents
    #[serde(rename = "forecast")]
    pub forecast_amount: f64,
}
