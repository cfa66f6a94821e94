// Report service - Use cases over the analytics reporting API
use crate::application::analytics_client::{AnalyticsClient, ReportResponse};
use crate::application::report_definitions::{
    self as defs, CONNECTION_PROBE, ORGANIC_TRAFFIC, PERFORMANCE, REALTIME_USERS, TOP_PAGES,
    TRAFFIC_SOURCES,
};
use crate::domain::dashboard::{DashboardMetrics, DashboardSnapshot};
use crate::domain::metrics::{
    ConnectionStatus, MetricQueryResult, PageRow, TimeSeriesRow, TrafficSourceRow,
};
use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("{query} query task failed: {source}")]
    TaskFailed {
        query: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
}

#[derive(Clone)]
pub struct ReportService {
    client: Arc<dyn AnalyticsClient>,
    property: Arc<str>,
}

impl ReportService {
    pub fn new(client: Arc<dyn AnalyticsClient>, property_id: &str) -> Self {
        Self {
            client,
            property: Arc::from(format!("properties/{}", property_id)),
        }
    }

    pub async fn get_realtime_users(&self) -> MetricQueryResult<String> {
        let outcome = self.query_realtime_users().await;
        settle(REALTIME_USERS.name, outcome, || "0".to_string())
    }

    pub async fn get_organic_traffic(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> MetricQueryResult<Vec<TimeSeriesRow>> {
        let outcome = self.query_organic_traffic(start_date, end_date).await;
        settle(ORGANIC_TRAFFIC.name, outcome, Vec::new)
    }

    pub async fn get_top_pages(&self, limit: u32) -> MetricQueryResult<Vec<PageRow>> {
        let outcome = self.query_top_pages(limit).await;
        settle(TOP_PAGES.name, outcome, Vec::new)
    }

    pub async fn get_traffic_sources(&self) -> MetricQueryResult<Vec<TrafficSourceRow>> {
        let outcome = self.query_traffic_sources().await;
        settle(TRAFFIC_SOURCES.name, outcome, Vec::new)
    }

    /// Raw metric values in `[sessions, engagementRate, averageSessionDuration]` order.
    pub async fn get_performance_metrics(&self) -> MetricQueryResult<Vec<String>> {
        let outcome = self.query_performance().await;
        settle(PERFORMANCE.name, outcome, Vec::new)
    }

    /// Run all five dashboard queries concurrently and wait for every one to
    /// settle. Individual query failures are reported per field; only a
    /// failure of the fan-out itself is returned as an error.
    pub async fn get_dashboard(&self) -> Result<DashboardSnapshot, AggregationError> {
        let realtime = {
            let service = self.clone();
            tokio::spawn(async move { service.get_realtime_users().await })
        };
        let organic = {
            let service = self.clone();
            tokio::spawn(async move { service.get_organic_traffic("7daysAgo", defs::TODAY).await })
        };
        let pages = {
            let service = self.clone();
            tokio::spawn(
                async move { service.get_top_pages(defs::DEFAULT_TOP_PAGES_LIMIT).await },
            )
        };
        let sources = {
            let service = self.clone();
            tokio::spawn(async move { service.get_traffic_sources().await })
        };
        let performance = {
            let service = self.clone();
            tokio::spawn(async move { service.get_performance_metrics().await })
        };

        let (realtime, organic, pages, sources, performance) =
            tokio::join!(realtime, organic, pages, sources, performance);

        let metrics = DashboardMetrics {
            realtime_users: joined(REALTIME_USERS.name, realtime)?,
            organic_traffic: joined(ORGANIC_TRAFFIC.name, organic)?,
            top_pages: joined(TOP_PAGES.name, pages)?,
            traffic_sources: joined(TRAFFIC_SOURCES.name, sources)?,
            performance_metrics: joined(PERFORMANCE.name, performance)?,
        };

        let failed = metrics.failed_count();
        if failed > 0 {
            tracing::warn!("Dashboard assembled with {} of 5 queries failed", failed);
        } else {
            tracing::debug!("Dashboard assembled with all queries succeeded");
        }

        Ok(DashboardSnapshot::new(metrics, chrono::Utc::now()))
    }

    /// Minimal same-day query to check that the property is reachable.
    pub async fn test_connection(&self) -> ConnectionStatus {
        let request = defs::connection_probe_request(defs::TODAY);
        match self.client.run_report(&self.property, &request).await {
            Ok(_) => ConnectionStatus {
                success: true,
                message: "Successfully connected to Google Analytics".to_string(),
            },
            Err(e) => {
                tracing::warn!("Connection test failed: {:#}", e);
                ConnectionStatus {
                    success: false,
                    message: format!("Connection failed: {:#}", e),
                }
            }
        }
    }

    /// Total sessions since `start_date`, `"0"` when the report has no rows.
    pub async fn session_count_since(&self, start_date: &str) -> Result<String> {
        let request = defs::connection_probe_request(start_date);
        let response = self.client.run_report(&self.property, &request).await?;
        first_metric(&CONNECTION_PROBE, &response, defs::connection_probe::SESSIONS)
    }

    async fn query_realtime_users(&self) -> Result<String> {
        let request = REALTIME_USERS.realtime_request();
        let response = self
            .client
            .run_realtime_report(&self.property, &request)
            .await?;
        first_metric(&REALTIME_USERS, &response, defs::realtime_users::ACTIVE_USERS)
    }

    async fn query_organic_traffic(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<TimeSeriesRow>> {
        use defs::organic_traffic as col;

        let request = defs::organic_traffic_request(start_date, end_date);
        let response = self.client.run_report(&self.property, &request).await?;

        response
            .rows
            .iter()
            .map(|row| {
                Ok(TimeSeriesRow {
                    date: ORGANIC_TRAFFIC.dimension_value(row, col::DATE)?.to_string(),
                    sessions: ORGANIC_TRAFFIC.metric_value(row, col::SESSIONS)?.to_string(),
                    engaged_sessions: ORGANIC_TRAFFIC
                        .metric_value(row, col::ENGAGED_SESSIONS)?
                        .to_string(),
                    engagement_rate: ORGANIC_TRAFFIC
                        .metric_value(row, col::ENGAGEMENT_RATE)?
                        .to_string(),
                })
            })
            .collect()
    }

    async fn query_top_pages(&self, limit: u32) -> Result<Vec<PageRow>> {
        use defs::top_pages as col;

        let request = defs::top_pages_request(limit);
        let response = self.client.run_report(&self.property, &request).await?;

        response
            .rows
            .iter()
            .map(|row| {
                Ok(PageRow {
                    title: TOP_PAGES.dimension_value(row, col::TITLE)?.to_string(),
                    path: TOP_PAGES.dimension_value(row, col::PATH)?.to_string(),
                    page_views: TOP_PAGES.metric_value(row, col::PAGE_VIEWS)?.to_string(),
                    avg_duration: TOP_PAGES.metric_value(row, col::AVG_DURATION)?.to_string(),
                })
            })
            .collect()
    }

    async fn query_traffic_sources(&self) -> Result<Vec<TrafficSourceRow>> {
        use defs::traffic_sources as col;

        let request = defs::traffic_sources_request();
        let response = self.client.run_report(&self.property, &request).await?;

        response
            .rows
            .iter()
            .map(|row| {
                Ok(TrafficSourceRow {
                    medium: TRAFFIC_SOURCES.dimension_value(row, col::MEDIUM)?.to_string(),
                    sessions: TRAFFIC_SOURCES.metric_value(row, col::SESSIONS)?.to_string(),
                })
            })
            .collect()
    }

    async fn query_performance(&self) -> Result<Vec<String>> {
        let request = defs::performance_request();
        let response = self.client.run_report(&self.property, &request).await?;

        Ok(response
            .rows
            .first()
            .map(|row| {
                row.metric_values
                    .iter()
                    .map(|v| v.value.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn settle<T>(
    query: &'static str,
    outcome: Result<T>,
    empty: impl FnOnce() -> T,
) -> MetricQueryResult<T> {
    if let Err(e) = &outcome {
        tracing::warn!("Error fetching {}: {:#}", query, e);
    }
    MetricQueryResult::settle(outcome, empty)
}

fn joined<T>(
    query: &'static str,
    handle: Result<T, tokio::task::JoinError>,
) -> Result<T, AggregationError> {
    handle.map_err(|source| {
        tracing::error!("{} query task did not complete: {}", query, source);
        AggregationError::TaskFailed { query, source }
    })
}

fn first_metric(
    layout: &defs::ReportLayout,
    response: &ReportResponse,
    index: usize,
) -> Result<String> {
    match response.rows.first() {
        Some(row) => Ok(layout.metric_value(row, index)?.to_string()),
        None => Ok("0".to_string()),
    }
}
