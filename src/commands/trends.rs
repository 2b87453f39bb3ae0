use crate::commands::{exit_with_error, open_store, print_json};
use crate::services::get_revenue_trends;
use std::path::PathBuf;

pub async fn run(csv: Option<PathBuf>) {
    let (_, store) = open_store(csv).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    match get_revenue_trends(store.as_ref()).await {
        Ok(series) => print_json(&series),
        Err(e) => exit_with_error(&e.to_string()),
    }
}
