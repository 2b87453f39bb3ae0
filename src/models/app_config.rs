use crate::error::{AppError, Result};
use crate::utils;
use std::path::PathBuf;

/// Which record store backend to read sales from
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// Supabase (PostgREST) table over HTTPS
    Supabase { url: String, key: String },
    /// Local CSV export
    Csv { path: PathBuf },
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Supabase { .. } => "supabase",
            StoreBackend::Csv { .. } => "csv",
        }
    }
}

/// Runtime configuration for the analytics service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Record store backend
    pub backend: StoreBackend,

    /// Table holding sale rows (Supabase backend only)
    pub sales_table: String,

    /// HTTP listen port
    pub port: u16,

    /// Fixed seed for reproducible forecasts (fresh entropy per request when unset)
    pub forecast_seed: Option<u64>,

    /// Timeout for one record store round-trip
    pub store_timeout_secs: u64,
}

impl AppConfig {
    /// Build configuration from environment variables
    ///
    /// `SALES_CSV_PATH` selects the CSV backend; otherwise both `SUPABASE_URL`
    /// and `SUPABASE_KEY` are required.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_csv(None)
    }

    /// Same as [`AppConfig::from_env`], but an explicit CSV path wins over the environment
    pub fn from_env_with_csv(csv_path: Option<PathBuf>) -> Result<Self> {
        let backend = match csv_path.or_else(utils::get_sales_csv_path) {
            Some(path) => StoreBackend::Csv { path },
            None => Self::supabase_from_env()?,
        };

        Ok(Self {
            backend,
            sales_table: utils::get_sales_table(),
            port: utils::get_port(),
            forecast_seed: utils::get_forecast_seed(),
            store_timeout_secs: utils::get_store_timeout_secs(),
        })
    }

    fn supabase_from_env() -> Result<StoreBackend> {
        match (utils::get_supabase_url(), utils::get_supabase_key()) {
            (Some(url), Some(key)) => Ok(StoreBackend::Supabase { url, key }),
            (None, _) => Err(AppError::Config(
                "SUPABASE_URL is not set (or set SALES_CSV_PATH to read a CSV export)".to_string(),
            )),
            (_, None) => Err(AppError::Config("SUPABASE_KEY is not set".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_as_str() {
        let csv = StoreBackend::Csv {
            path: PathBuf::from("mock_sales.csv"),
        };
        assert_eq!(csv.as_str(), "csv");

        let supabase = StoreBackend::Supabase {
            url: "https://example.supabase.co".to_string(),
            key: "anon".to_string(),
        };
        assert_eq!(supabase.as_str(), "supabase");
    }

    #[test]
    fn test_csv_override_selects_csv_backend() {
        let config = AppConfig::from_env_with_csv(Some(PathBuf::from("sales.csv"))).unwrap();
        assert_eq!(
            config.backend,
            StoreBackend::Csv {
                path: PathBuf::from("sales.csv")
            }
        );
    }
}
