use crate::error::Result;
use crate::models::RevenueStats;
use crate::services::record_store::RecordStore;
use crate::utils::round_to_cents;
use tracing::debug;

/// Compute revenue statistics over every sale amount
///
/// An empty record set yields `{0, 0, 0}` rather than dividing by zero.
pub fn calculate_stats(amounts: &[f64]) -> RevenueStats {
    if amounts.is_empty() {
        return RevenueStats::default();
    }

    let total: f64 = amounts.iter().sum();
    let count = amounts.len();

    RevenueStats {
        total_revenue: round_to_cents(total),
        total_orders: count,
        avg_order_value: round_to_cents(total / count as f64),
    }
}

/// Fetch all sale amounts and summarize them. Store failures propagate to the caller.
///
/// Only the `amount` column is read, so timestamps never affect stats.
pub async fn get_revenue_stats(store: &dyn RecordStore) -> Result<RevenueStats> {
    let amounts = store.fetch_amounts().await?;
    let stats = calculate_stats(&amounts);
    debug!(
        total_orders = stats.total_orders,
        total_revenue = stats.total_revenue,
        "Calculated revenue stats"
    );
    Ok(stats)
}
