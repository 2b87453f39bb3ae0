use crate::commands::{exit_with_error, open_store, print_json};
use crate::services::get_revenue_stats;
use std::path::PathBuf;

pub async fn run(csv: Option<PathBuf>) {
    let (_, store) = open_store(csv).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    match get_revenue_stats(store.as_ref()).await {
        Ok(stats) => print_json(&stats),
        Err(e) => exit_with_error(&e.to_string()),
    }
}
