pub mod api;

use crate::constants::routes;
use crate::error::Result;
use crate::services::{ForecastRng, Forecaster, SharedRecordStore};
use axum::{extract::FromRef, routing::get, Router};
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedRecordStore,
    pub forecaster: Forecaster,
    pub forecast_rng: ForecastRng,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: SharedRecordStore, forecast_rng: ForecastRng) -> Self {
        Self {
            store,
            forecaster: Forecaster::default(),
            forecast_rng,
            started_at: Instant::now(),
        }
    }
}

// FromRef implementations to extract specific state components
impl FromRef<AppState> for SharedRecordStore {
    fn from_ref(app_state: &AppState) -> SharedRecordStore {
        app_state.store.clone()
    }
}

/// Build the router with all analytics routes
pub fn build_router(app_state: AppState) -> Router {
    // The dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::STATS, get(api::stats_handler))
        .route(routes::TRENDS, get(api::trends_handler))
        .route(routes::FORECAST, get(api::forecast_handler))
        .route(routes::HEALTH, get(api::health_handler))
        .layer(cors)
        .with_state(app_state)
}

/// Start the axum server
pub async fn serve(app_state: AppState, port: u16) -> Result<()> {
    tracing::info!(
        backend = app_state.store.backend_type(),
        "Starting revenue-pulse server"
    );

    tracing::info!("Registering routes:");
    tracing::info!("  GET {}", routes::STATS);
    tracing::info!("  GET {}", routes::TRENDS);
    tracing::info!("  GET {}", routes::FORECAST);
    tracing::info!("  GET {}", routes::HEALTH);

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
