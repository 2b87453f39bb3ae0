//! Analytics constants
//!
//! Route paths, record store defaults and the fixed parameters of the
//! forecast projection.

/// Table holding raw sale rows in the record store
pub const DEFAULT_SALES_TABLE: &str = "sales";

/// Default HTTP port (matches the dashboard's expected API origin)
pub const DEFAULT_PORT: u16 = 8000;

/// Default timeout for a single record store round-trip
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Forecast projection parameters
pub mod forecast {
    /// Number of most recent daily aggregates averaged into the baseline
    pub const BASELINE_WINDOW_DAYS: usize = 14;

    /// Number of projected points per forecast
    pub const HORIZON_DAYS: i64 = 7;

    /// Lower bound of the uniform multiplier applied to the baseline
    pub const VARIATION_MIN: f64 = 0.85;

    /// Upper bound of the uniform multiplier applied to the baseline
    pub const VARIATION_MAX: f64 = 1.15;
}

/// HTTP routes
pub mod routes {
    pub const STATS: &str = "/api/v1/analytics/stats";
    pub const TRENDS: &str = "/api/v1/analytics/trends";
    pub const FORECAST: &str = "/api/v1/analytics/forecast";
    pub const HEALTH: &str = "/health";
}
