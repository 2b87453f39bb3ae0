use crate::constants::{DEFAULT_PORT, DEFAULT_SALES_TABLE, DEFAULT_STORE_TIMEOUT_SECS};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Initialize the global tracing subscriber (stderr, `RUST_LOG` or `info`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Get Supabase project URL from `SUPABASE_URL`
pub fn get_supabase_url() -> Option<String> {
    non_empty_var("SUPABASE_URL")
}

/// Get Supabase API key from `SUPABASE_KEY`
pub fn get_supabase_key() -> Option<String> {
    non_empty_var("SUPABASE_KEY")
}

/// Get sales table name from `SALES_TABLE` or use default
pub fn get_sales_table() -> String {
    non_empty_var("SALES_TABLE").unwrap_or_else(|| DEFAULT_SALES_TABLE.to_string())
}

/// Get CSV export path from `SALES_CSV_PATH`
pub fn get_sales_csv_path() -> Option<PathBuf> {
    non_empty_var("SALES_CSV_PATH").map(PathBuf::from)
}

/// Get HTTP port from `PORT` or use default
pub fn get_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get fixed forecast seed from `FORECAST_SEED`
pub fn get_forecast_seed() -> Option<u64> {
    std::env::var("FORECAST_SEED").ok().and_then(|v| v.parse().ok())
}

/// Get record store timeout from `STORE_TIMEOUT_SECS` or use default
pub fn get_store_timeout_secs() -> u64 {
    std::env::var("STORE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Round a monetary value to 2 decimal places, exact halves to the even cent
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Format date as YYYY-MM-DD
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(150.0), 150.0);
        assert_eq!(round_to_cents(10.006), 10.01);
        assert_eq!(round_to_cents(10.004), 10.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(10.125), 10.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(&date), "2024-01-02");
    }
}
