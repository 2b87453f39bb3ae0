use crate::constants::routes;
use crate::error::AppError;
use crate::models::{DailyAggregate, ForecastPoint, RevenueStats};
use crate::server::AppState;
use crate::services::{
    get_revenue_stats, get_revenue_trends, write_api_log_entry, ApiPerformanceMetrics, ApiStatus,
    SharedRecordStore,
};
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, instrument};

/// GET /api/v1/analytics/stats - Total revenue, order count and average order value
///
/// Store failures are not caught here; they surface as a 500.
#[instrument(skip(store))]
pub async fn stats_handler(
    State(store): State<SharedRecordStore>,
) -> Result<Json<RevenueStats>, AppError> {
    debug!("Received request for revenue stats");
    let mut metrics = ApiPerformanceMetrics::new(routes::STATS);

    match get_revenue_stats(store.as_ref()).await {
        Ok(stats) => {
            metrics.record_count = stats.total_orders;
            metrics.complete();
            write_api_log_entry(&metrics);
            Ok(Json(stats))
        }
        Err(e) => {
            metrics.fail(e.to_string());
            write_api_log_entry(&metrics);
            Err(e)
        }
    }
}

/// GET /api/v1/analytics/trends - Daily revenue, ascending by date
///
/// Store failures are not caught here; they surface as a 500.
#[instrument(skip(store))]
pub async fn trends_handler(
    State(store): State<SharedRecordStore>,
) -> Result<Json<Vec<DailyAggregate>>, AppError> {
    debug!("Received request for revenue trends");
    let mut metrics = ApiPerformanceMetrics::new(routes::TRENDS);

    match get_revenue_trends(store.as_ref()).await {
        Ok(series) => {
            metrics.record_count = series.len();
            metrics.complete();
            write_api_log_entry(&metrics);
            Ok(Json(series))
        }
        Err(e) => {
            metrics.fail(e.to_string());
            write_api_log_entry(&metrics);
            Err(e)
        }
    }
}

/// GET /api/v1/analytics/forecast - Seven projected days of revenue
///
/// Always 200: any fault is logged and answered with an empty array.
#[instrument(skip(app_state))]
pub async fn forecast_handler(State(app_state): State<AppState>) -> Json<Vec<ForecastPoint>> {
    debug!("Received request for revenue forecast");
    let mut metrics = ApiPerformanceMetrics::new(routes::FORECAST);

    let masked = app_state
        .forecaster
        .forecast_or_empty(app_state.store.as_ref(), &app_state.forecast_rng)
        .await;
    if let Some(fault) = &masked.fault {
        metrics.status = ApiStatus::Degraded;
        metrics.error_message = Some(fault.to_string());
    }
    let points = masked.points;

    metrics.record_count = points.len();
    metrics.complete();
    write_api_log_entry(&metrics);
    Json(points)
}

/// Health information
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store_backend: &'static str,
    pub uptime_secs: u64,
    pub current_system_time: String,
    pub version: &'static str,
}

/// GET /health - Liveness and basic runtime info
///
/// Does not touch the record store.
pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store_backend: app_state.store.backend_type(),
        uptime_secs: app_state.started_at.elapsed().as_secs(),
        current_system_time: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
