use serde::{Deserialize, Serialize};

/// Summary statistics over the full sales record set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueStats {
    /// Sum of all amounts, rounded to cents
    pub total_revenue: f64,

    /// Number of sale records
    pub total_orders: usize,

    /// Mean amount per record, rounded to cents
    pub avg_order_value: f64,
}
