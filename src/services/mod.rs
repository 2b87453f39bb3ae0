pub mod aggregator;
pub mod api_logging;
pub mod csv_store;
pub mod forecaster;
pub mod record_store;
pub mod revenue_stats;
pub mod supabase_client;
pub mod trend_builder;

pub use aggregator::Aggregator;
pub use api_logging::{write_api_log_entry, ApiPerformanceMetrics, ApiStatus};
pub use csv_store::{read_sales_amounts, read_sales_csv, CsvRecordStore};
pub use forecaster::{ForecastRng, Forecaster, MaskedForecast};
pub use record_store::{connect_store, InMemoryRecordStore, RecordStore, SharedRecordStore};
pub use revenue_stats::{calculate_stats, get_revenue_stats};
pub use supabase_client::SupabaseStore;
pub use trend_builder::{build_trend_series, get_revenue_trends};
