//! Record store abstraction
//!
//! The analytics services only ever read `{timestamp, amount}` rows. Backends
//! implement [`RecordStore`] and are injected through [`SharedRecordStore`].

use crate::error::{AppError, Result};
use crate::models::{AppConfig, SaleRecord, StoreBackend};
use crate::services::csv_store::CsvRecordStore;
use crate::services::supabase_client::SupabaseStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Read-only source of sale records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every sale record; no ordering is guaranteed
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>>;

    /// Fetch only the sale amounts; backends that can skip the timestamp column should
    async fn fetch_amounts(&self) -> Result<Vec<f64>> {
        Ok(self
            .fetch_sales()
            .await?
            .into_iter()
            .map(|r| r.amount)
            .collect())
    }

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}

pub type SharedRecordStore = Arc<dyn RecordStore>;

/// Construct the store selected by `config`
pub fn connect_store(config: &AppConfig) -> Result<SharedRecordStore> {
    let store: SharedRecordStore = match &config.backend {
        StoreBackend::Supabase { url, key } => Arc::new(SupabaseStore::new(
            url.clone(),
            key.clone(),
            config.sales_table.clone(),
            config.store_timeout_secs,
        )?),
        StoreBackend::Csv { path } => Arc::new(CsvRecordStore::new(path.clone())),
    };

    info!(backend = store.backend_type(), "Record store ready");
    Ok(store)
}

/// Fixed in-memory rows, optionally failing every fetch
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<SaleRecord>,
    failure: Option<String>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A store whose every fetch fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>> {
        match &self.failure {
            Some(message) => Err(AppError::Store(message.clone())),
            None => Ok(self.records.clone()),
        }
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
