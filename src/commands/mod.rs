pub mod forecast;
pub mod serve;
pub mod stats;
pub mod trends;

use crate::error::Result;
use crate::models::AppConfig;
use crate::services::{connect_store, SharedRecordStore};
use serde::Serialize;
use std::path::PathBuf;

/// Load configuration and connect the selected record store
pub(crate) fn open_store(csv: Option<PathBuf>) -> Result<(AppConfig, SharedRecordStore)> {
    let config = AppConfig::from_env_with_csv(csv)?;
    let store = connect_store(&config)?;
    Ok((config, store))
}

/// Print a value as pretty JSON, or exit with an error
pub(crate) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

pub(crate) fn exit_with_error(message: &str) -> ! {
    eprintln!("❌ Error: {}", message);
    std::process::exit(1);
}
