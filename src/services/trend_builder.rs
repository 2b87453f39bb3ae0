use crate::error::Result;
use crate::models::{DailyAggregate, SaleRecord};
use crate::services::aggregator::Aggregator;
use crate::services::record_store::RecordStore;
use tracing::debug;

/// Daily revenue series, ascending by date
pub fn build_trend_series(records: &[SaleRecord]) -> Vec<DailyAggregate> {
    Aggregator::aggregate_daily(records)
}

/// Fetch all sales and roll them up per day. Store failures propagate to the caller.
pub async fn get_revenue_trends(store: &dyn RecordStore) -> Result<Vec<DailyAggregate>> {
    let records = store.fetch_sales().await?;
    let series = build_trend_series(&records);
    debug!(days = series.len(), "Built revenue trend");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::record_store::InMemoryRecordStore;
    use chrono::NaiveDate;

    fn sale(date: &str, amount: f64) -> SaleRecord {
        let ts = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        SaleRecord::new(ts, amount)
    }

    #[tokio::test]
    async fn test_trends_grouped_summed_ascending() {
        let store = InMemoryRecordStore::new(vec![
            sale("2024-01-02", 50.0),
            sale("2024-01-01", 30.0),
            sale("2024-01-02", 20.0),
        ]);

        let trends = get_revenue_trends(&store).await.unwrap();
        let json = serde_json::to_value(&trends).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"date": "2024-01-01", "amount": 30.0},
                {"date": "2024-01-02", "amount": 70.0}
            ])
        );
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_series() {
        let store = InMemoryRecordStore::new(vec![]);
        assert!(get_revenue_trends(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = InMemoryRecordStore::failing("timeout");
        assert!(get_revenue_trends(&store).await.is_err());
    }

    #[test]
    fn test_deterministic() {
        let records = vec![sale("2024-03-01", 1.5), sale("2024-02-28", 2.5)];
        assert_eq!(build_trend_series(&records), build_trend_series(&records));
    }
}
