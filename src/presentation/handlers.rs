// HTTP request handlers
use crate::application::report_definitions::DEFAULT_TOP_PAGES_LIMIT;
use crate::domain::dashboard::DashboardMetrics;
use crate::domain::display::parse_str_or_default;
use crate::domain::metrics::{ConnectionStatus, MetricQueryResult, PageRow, TimeSeriesRow};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganicTrafficQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopPagesQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub data: DashboardMetrics,
    pub last_updated: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }))
}

/// Endpoint index
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "SEO Analytics API is running",
        "endpoints": {
            "dashboard": "/api/analytics/dashboard",
            "organicTraffic": "/api/analytics/organic-traffic",
            "topPages": "/api/analytics/top-pages",
            "test": "/api/analytics/test",
        }
    }))
}

pub async fn test_connection(State(state): State<Arc<AppState>>) -> Json<ConnectionStatus> {
    Json(state.report_service.test_connection().await)
}

/// All five dashboard queries in one payload
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let snapshot = state
        .report_service
        .get_dashboard()
        .await
        .map_err(ApiError::Dashboard)?;

    let last_updated = snapshot.last_updated_iso();
    Ok(Json(DashboardResponse {
        success: true,
        data: snapshot.metrics,
        last_updated,
    }))
}

pub async fn organic_traffic(
    Query(query): Query<OrganicTrafficQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<MetricQueryResult<Vec<TimeSeriesRow>>> {
    let start_date = query.start_date.as_deref().unwrap_or("30daysAgo");
    let end_date = query.end_date.as_deref().unwrap_or("today");

    Json(
        state
            .report_service
            .get_organic_traffic(start_date, end_date)
            .await,
    )
}

pub async fn top_pages(
    Query(query): Query<TopPagesQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<MetricQueryResult<Vec<PageRow>>> {
    let limit = parse_limit(query.limit.as_deref());
    Json(state.report_service.get_top_pages(limit).await)
}

/// Non-numeric, missing or non-positive limits fall back to the default.
/// No upper bound is applied here; the upstream caps it.
fn parse_limit(raw: Option<&str>) -> u32 {
    let default = DEFAULT_TOP_PAGES_LIMIT;
    let parsed = raw
        .map(|s| parse_str_or_default(s, default as f64))
        .unwrap_or(default as f64)
        .floor();

    if parsed >= 1.0 {
        parsed.min(u32::MAX as f64) as u32
    } else {
        default
    }
}
