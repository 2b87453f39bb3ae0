mod app_config;
mod daily_aggregate;
mod forecast_point;
mod revenue_stats;
mod sale_record;

pub use app_config::{AppConfig, StoreBackend};
pub use daily_aggregate::DailyAggregate;
pub use forecast_point::ForecastPoint;
pub use revenue_stats::RevenueStats;
pub(crate) use sale_record::deserialize_amount;
pub use sale_record::{parse_amount, parse_timestamp, SaleRecord};
