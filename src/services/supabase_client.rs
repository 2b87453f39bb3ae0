use crate::error::{AppError, Result};
use crate::models::SaleRecord;
use crate::services::record_store::RecordStore;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info};

/// Row of an amount-only select
#[derive(Deserialize)]
struct AmountRow {
    #[serde(deserialize_with = "crate::models::deserialize_amount")]
    amount: f64,
}

/// Record store backed by a Supabase table, read through its PostgREST endpoint
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    table: String,
    client: reqwest::Client,
}

impl SupabaseStore {
    /// Create a new Supabase client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Anon or service key, sent as both `apikey` and bearer token
    /// * `table` - Table holding the sale rows
    /// * `timeout_secs` - Per-request timeout
    pub fn new(base_url: String, api_key: String, table: String, timeout_secs: u64) -> Result<Self> {
        // Trim whitespace and remove trailing slashes from base_url
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Invalid SUPABASE_URL: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, table = %table, "Created Supabase record store");

        Ok(Self {
            base_url,
            api_key,
            table,
            client,
        })
    }

    /// PostgREST URL selecting `columns` from the sales table
    fn select_url(&self, columns: &str) -> String {
        format!("{}/rest/v1/{}?select={}", self.base_url, self.table, columns)
    }

    /// URL for trend and forecast reads
    pub fn sales_url(&self) -> String {
        self.select_url("timestamp,amount")
    }

    /// URL for stats reads
    pub fn amounts_url(&self) -> String {
        self.select_url("amount")
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| AppError::Config(format!("Invalid SUPABASE_KEY: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::Config(format!("Invalid SUPABASE_KEY: {}", e)))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl SupabaseStore {
    /// GET `url` and decode the JSON row array
    async fn fetch_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        debug!("Fetching rows from {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Supabase request failed: {} (url: {})", e, url);
                error!("{}", error_msg);
                AppError::Network(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(AppError::Store(format!(
                "Supabase returned error status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        let rows: Vec<T> = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("Failed to parse sales rows: {}", e)))?;

        debug!(rows = rows.len(), "Fetched rows from Supabase");
        Ok(rows)
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>> {
        self.fetch_rows(&self.sales_url()).await
    }

    async fn fetch_amounts(&self) -> Result<Vec<f64>> {
        let rows: Vec<AmountRow> = self.fetch_rows(&self.amounts_url()).await?;
        Ok(rows.into_iter().map(|r| r.amount).collect())
    }

    fn backend_type(&self) -> &'static str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_url_trims_trailing_slash() {
        let store = SupabaseStore::new(
            " https://xyz.supabase.co/ ".to_string(),
            "anon".to_string(),
            "sales".to_string(),
            30,
        )
        .unwrap();

        assert_eq!(
            store.sales_url(),
            "https://xyz.supabase.co/rest/v1/sales?select=timestamp,amount"
        );
        assert_eq!(
            store.amounts_url(),
            "https://xyz.supabase.co/rest/v1/sales?select=amount"
        );
    }

    #[test]
    fn test_amount_rows_accept_numbers_and_strings() {
        let rows: Vec<AmountRow> =
            serde_json::from_str(r#"[{"amount": 12.5}, {"amount": "7.25"}]"#).unwrap();
        let amounts: Vec<f64> = rows.into_iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![12.5, 7.25]);
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let result = SupabaseStore::new(
            "xyz.supabase.co".to_string(),
            "anon".to_string(),
            "sales".to_string(),
            30,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_auth_headers() {
        let store = SupabaseStore::new(
            "https://xyz.supabase.co".to_string(),
            "secret".to_string(),
            "sales".to_string(),
            30,
        )
        .unwrap();

        let headers = store.auth_headers().unwrap();
        assert_eq!(headers.get("apikey").unwrap(), "secret");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
    }
}
