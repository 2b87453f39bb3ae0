//! Short-term sales projection
//!
//! Not a statistical model: the forecast is a recent-average baseline scaled by
//! an independent uniform multiplier per day. Projected dates start two days
//! after the last observed date; the immediate next day is skipped.

use crate::constants::forecast::{BASELINE_WINDOW_DAYS, HORIZON_DAYS, VARIATION_MAX, VARIATION_MIN};
use crate::error::{AppError, Result};
use crate::models::{DailyAggregate, ForecastPoint};
use crate::services::aggregator::Aggregator;
use crate::services::record_store::RecordStore;
use crate::utils::round_to_cents;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Where forecast multipliers come from
#[derive(Clone, Debug)]
pub enum ForecastRng {
    /// Fresh OS-seeded generator for every forecast
    Entropy,
    /// One shared generator; repeated forecasts continue the same sequence
    Seeded(Arc<Mutex<StdRng>>),
}

impl ForecastRng {
    pub fn seeded(seed: u64) -> Self {
        ForecastRng::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or(ForecastRng::Entropy)
    }

    /// Run `f` with the generator. Never call across an `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        match self {
            ForecastRng::Entropy => {
                let mut rng = StdRng::from_entropy();
                Ok(f(&mut rng))
            }
            ForecastRng::Seeded(shared) => {
                let mut rng = shared
                    .lock()
                    .map_err(|_| AppError::Computation("forecast RNG lock poisoned".to_string()))?;
                Ok(f(&mut *rng))
            }
        }
    }
}

/// Projection parameters
#[derive(Debug, Clone)]
pub struct Forecaster {
    pub window_days: usize,
    pub horizon_days: i64,
    pub variation_min: f64,
    pub variation_max: f64,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self {
            window_days: BASELINE_WINDOW_DAYS,
            horizon_days: HORIZON_DAYS,
            variation_min: VARIATION_MIN,
            variation_max: VARIATION_MAX,
        }
    }
}

impl Forecaster {
    /// Mean of the last `window_days` aggregates, or of all of them when fewer exist
    ///
    /// `aggregates` must be ascending by date. Returns `None` when empty.
    pub fn baseline(&self, aggregates: &[DailyAggregate]) -> Option<f64> {
        if aggregates.is_empty() {
            return None;
        }

        let start = aggregates.len().saturating_sub(self.window_days);
        let window = &aggregates[start..];
        let sum: f64 = window.iter().map(|d| d.total_amount).sum();
        Some(sum / window.len() as f64)
    }

    /// Project `horizon_days` points from ascending daily aggregates
    ///
    /// Point `i` (1-based) lands on `last_date + (i + 1)` days with amount
    /// `round(baseline * v, 2)`, `v` uniform in `[variation_min, variation_max]`.
    pub fn project<R: Rng + ?Sized>(
        &self,
        aggregates: &[DailyAggregate],
        rng: &mut R,
    ) -> Result<Vec<ForecastPoint>> {
        let baseline = match self.baseline(aggregates) {
            Some(b) => b,
            None => return Ok(vec![]),
        };
        if !baseline.is_finite() {
            return Err(AppError::Computation(format!(
                "baseline is not finite: {}",
                baseline
            )));
        }

        let last_date = aggregates
            .iter()
            .map(|d| d.date)
            .max()
            .ok_or_else(|| AppError::Computation("no dates to project from".to_string()))?;

        debug!(baseline, %last_date, "Projecting forecast");

        (1..=self.horizon_days)
            .map(|i| -> Result<ForecastPoint> {
                let date = last_date
                    .checked_add_signed(Duration::days(i + 1))
                    .ok_or_else(|| {
                        AppError::Computation(format!("date overflow after {}", last_date))
                    })?;
                let variation = rng.gen_range(self.variation_min..=self.variation_max);
                Ok(ForecastPoint {
                    date,
                    forecast_amount: round_to_cents(baseline * variation),
                })
            })
            .collect()
    }

    /// Fetch, aggregate and project
    pub async fn forecast(
        &self,
        store: &dyn RecordStore,
        rng: &ForecastRng,
    ) -> Result<Vec<ForecastPoint>> {
        let records = store.fetch_sales().await?;
        if records.is_empty() {
            return Ok(vec![]);
        }

        let daily = Aggregator::aggregate_daily(&records);
        rng.with_rng(|r| self.project(&daily, r))?
    }

    /// Like [`Forecaster::forecast`], but any fault is logged and reported as no forecast
    pub async fn forecast_or_empty(
        &self,
        store: &dyn RecordStore,
        rng: &ForecastRng,
    ) -> MaskedForecast {
        match self.forecast(store, rng).await {
            Ok(points) => MaskedForecast {
                points,
                fault: None,
            },
            Err(e) => {
                error!(error = %e, "Forecasting failed, returning empty forecast");
                MaskedForecast {
                    points: vec![],
                    fault: Some(e),
                }
            }
        }
    }
}

/// Forecast result after fault masking
#[derive(Debug)]
pub struct MaskedForecast {
    /// Empty whenever `fault` is set
    pub points: Vec<ForecastPoint>,
    /// The fault that was masked, kept for request metrics
    pub fault: Option<AppError>,
}
