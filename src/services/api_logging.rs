use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// API request performance metrics
#[derive(Debug, Clone)]
pub struct ApiPerformanceMetrics {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_ms: u64,
    pub status: ApiStatus,
    pub endpoint: String,
    /// Rows returned (orders for stats, days for trends, points for forecast)
    pub record_count: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiStatus {
    Success,
    Fail,
    /// Fault masked as an empty result
    Degraded,
}

impl ApiPerformanceMetrics {
    pub fn new(endpoint: &str) -> Self {
        let now = Utc::now();
        Self {
            start_time: now,
            end_time: now,
            duration_ms: 0,
            status: ApiStatus::Success,
            endpoint: endpoint.to_string(),
            record_count: 0,
            error_message: None,
        }
    }

    pub fn complete(&mut self) {
        self.end_time = Utc::now();
        self.duration_ms = (self.end_time - self.start_time).num_milliseconds().max(0) as u64;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = ApiStatus::Fail;
        self.error_message = Some(message.into());
        self.complete();
    }
}

fn format_duration(duration_ms: u64) -> String {
    if duration_ms >= 1000 {
        format!("{}.{:01}s", duration_ms / 1000, (duration_ms % 1000) / 100)
    } else {
        format!("{}ms", duration_ms)
    }
}

/// Emit one compact log line per analytics request
pub fn write_api_log_entry(metrics: &ApiPerformanceMetrics) {
    let status_str = match metrics.status {
        ApiStatus::Success => "OK",
        ApiStatus::Fail => "FAIL",
        ApiStatus::Degraded => "DEGRADED",
    };
    let duration = format_duration(metrics.duration_ms);

    match metrics.status {
        ApiStatus::Success => info!(
            "[API] {} {} rows={} {}",
            status_str, metrics.endpoint, metrics.record_count, duration
        ),
        _ => warn!(
            "[API] {} {} rows={} {} error={}",
            status_str,
            metrics.endpoint,
            metrics.record_count,
            duration,
            metrics.error_message.as_deref().unwrap_or("-")
        ),
    }
}
