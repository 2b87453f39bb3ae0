use crate::commands::open_store;
use crate::server::{self, AppState};
use crate::services::ForecastRng;
use std::path::PathBuf;

pub async fn run(port: Option<u16>, csv: Option<PathBuf>) {
    let (config, store) = match open_store(csv) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("❌ Cannot start server: {}", e);
            std::process::exit(1);
        }
    };
    let port = port.unwrap_or(config.port);

    println!("🚀 Starting revenue-pulse server on port {}", port);
    println!("📦 Record store: {}", config.backend.as_str());
    match config.forecast_seed {
        Some(seed) => println!("🎲 Forecast seed: {} (reproducible)", seed),
        None => println!("🎲 Forecast seed: fresh entropy per request"),
    }

    let app_state = AppState::new(store, ForecastRng::from_seed(config.forecast_seed));

    if let Err(e) = server::serve(app_state, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
