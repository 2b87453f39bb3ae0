use crate::models::{DailyAggregate, SaleRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Service for rolling raw sales up into calendar days
pub struct Aggregator;

impl Aggregator {
    /// Aggregate sale records into daily totals
    ///
    /// # Arguments
    /// * `records` - Sale records in any order
    ///
    /// # Returns
    /// One `DailyAggregate` per distinct date, ascending by date
    pub fn aggregate_daily(records: &[SaleRecord]) -> Vec<DailyAggregate> {
        if records.is_empty() {
            return vec![];
        }

        debug!("Aggregating {} sale records into daily buckets", records.len());

        let result: Vec<DailyAggregate> = Self::group_by_date(records)
            .into_iter()
            .map(|(date, total)| DailyAggregate::new(date, total))
            .collect();

        debug!("Aggregated into {} days", result.len());
        result
    }

    /// Sum amounts per calendar date (BTreeMap keeps dates sorted)
    fn group_by_date(records: &[SaleRecord]) -> BTreeMap<NaiveDate, f64> {
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for record in records {
            *buckets.entry(record.date()).or_insert(0.0) += record.amount;
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use quickcheck_macros::quickcheck;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(Aggregator::aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_groups_and_sorts_by_date() {
        let records = vec![
            SaleRecord::new(at(2024, 1, 2, 9), 50.0),
            SaleRecord::new(at(2024, 1, 1, 14), 30.0),
            SaleRecord::new(at(2024, 1, 2, 18), 20.0),
        ];

        let daily = Aggregator::aggregate_daily(&records);

        assert_eq!(
            daily,
            vec![
                DailyAggregate::new(date(2024, 1, 1), 30.0),
                DailyAggregate::new(date(2024, 1, 2), 70.0),
            ]
        );
    }

    #[test]
    fn test_time_of_day_discarded() {
        let records = vec![
            SaleRecord::new(at(2024, 2, 29, 0), 1.0),
            SaleRecord::new(at(2024, 2, 29, 23), 2.0),
            SaleRecord::new(at(2024, 3, 1, 0), 4.0),
        ];

        let daily = Aggregator::aggregate_daily(&records);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].total_amount, 3.0);
        assert_eq!(daily[1].date, date(2024, 3, 1));
    }

    #[test]
    fn test_month_boundary_ordering() {
        let records = vec![
            SaleRecord::new(at(2024, 2, 1, 10), 5.0),
            SaleRecord::new(at(2023, 12, 31, 10), 7.0),
            SaleRecord::new(at(2024, 1, 15, 10), 6.0),
        ];

        let dates: Vec<NaiveDate> = Aggregator::aggregate_daily(&records)
            .into_iter()
            .map(|d| d.date)
            .collect();

        assert_eq!(dates, vec![date(2023, 12, 31), date(2024, 1, 15), date(2024, 2, 1)]);
    }

    #[quickcheck]
    fn prop_aggregation_conserves_total(rows: Vec<(u8, u8, u32)>) -> bool {
        let base = date(2024, 1, 1);
        let records: Vec<SaleRecord> = rows
            .iter()
            .map(|&(day, hour, cents)| {
                let ts = (base + chrono::Duration::days((day % 60) as i64))
                    .and_hms_opt((hour % 24) as u32, 0, 0)
                    .unwrap();
                SaleRecord::new(ts, (cents % 1_000_000) as f64 / 100.0)
            })
            .collect();

        let raw_total: f64 = records.iter().map(|r| r.amount).sum();
        let daily = Aggregator::aggregate_daily(&records);
        let daily_total: f64 = daily.iter().map(|d| d.total_amount).sum();

        let ascending = daily.windows(2).all(|w| w[0].date < w[1].date);
        ascending && (raw_total - daily_total).abs() <= 1e-6 * raw_total.max(1.0)
    }
}
