use crate::commands::{exit_with_error, open_store, print_json};
use crate::services::{ForecastRng, Forecaster};
use std::path::PathBuf;

/// Print a forecast. `--seed` wins over `FORECAST_SEED`.
pub async fn run(csv: Option<PathBuf>, seed: Option<u64>) {
    let (config, store) = open_store(csv).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let rng = ForecastRng::from_seed(seed.or(config.forecast_seed));

    // Same policy as the HTTP endpoint: faults print an empty forecast
    let masked = Forecaster::default()
        .forecast_or_empty(store.as_ref(), &rng)
        .await;
    print_json(&masked.points);
}
