// Dashboard domain model
use super::metrics::{MetricQueryResult, PageRow, TimeSeriesRow, TrafficSourceRow};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// The five per-query results making up one dashboard load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub realtime_users: MetricQueryResult<String>,
    pub organic_traffic: MetricQueryResult<Vec<TimeSeriesRow>>,
    pub top_pages: MetricQueryResult<Vec<PageRow>>,
    pub traffic_sources: MetricQueryResult<Vec<TrafficSourceRow>>,
    pub performance_metrics: MetricQueryResult<Vec<String>>,
}

impl DashboardMetrics {
    pub fn failed_count(&self) -> usize {
        [
            self.realtime_users.success,
            self.organic_traffic.success,
            self.top_pages.success,
            self.traffic_sources.success,
            self.performance_metrics.success,
        ]
        .iter()
        .filter(|ok| !**ok)
        .count()
    }
}

/// A timestamped dashboard load. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub last_updated: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn new(metrics: DashboardMetrics, last_updated: DateTime<Utc>) -> Self {
        Self {
            metrics,
            last_updated,
        }
    }

    pub fn last_updated_iso(&self) -> String {
        self.last_updated.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metrics() -> DashboardMetrics {
        DashboardMetrics {
            realtime_users: MetricQueryResult::ok("3".to_string()),
            organic_traffic: MetricQueryResult::ok(Vec::new()),
            top_pages: MetricQueryResult::failed(Vec::new(), "boom"),
            traffic_sources: MetricQueryResult::ok(Vec::new()),
            performance_metrics: MetricQueryResult::ok(vec!["10".into()]),
        }
    }

    #[test]
    fn test_failed_count() {
        assert_eq!(metrics().failed_count(), 1);
    }

    #[test]
    fn test_last_updated_is_iso_8601_utc() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let snapshot = DashboardSnapshot::new(metrics(), at);
        assert_eq!(snapshot.last_updated_iso(), "2024-05-01T12:30:00.000Z");
    }
}
