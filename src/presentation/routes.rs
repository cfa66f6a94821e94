// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    api_index, dashboard, health_check, organic_traffic, test_connection, top_pages,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let analytics = Router::new()
        .route("/test", get(test_connection))
        .route("/dashboard", get(dashboard))
        .route("/organic-traffic", get(organic_traffic))
        .route("/top-pages", get(top_pages));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/analytics", get(api_index))
        .route("/api/analytics/", get(api_index))
        .nest("/api/analytics", analytics)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report_service::ReportService;
    use crate::application::report_service::tests::{FakeAnalyticsClient, populated_client};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(client: FakeAnalyticsClient) -> (Router, Arc<FakeAnalyticsClient>) {
        let client = Arc::new(client);
        let state = Arc::new(AppState {
            report_service: ReportService::new(client.clone(), "987"),
        });
        (build_router(state), client)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_wraps_all_five_results() {
        let client = FakeAnalyticsClient {
            failing: vec!["sessionMedium"],
            ..populated_client()
        };
        let (router, _) = router(client);

        let (status, body) = get_json(router, "/api/analytics/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["lastUpdated"].as_str().unwrap().ends_with('Z'));

        let data = &body["data"];
        for key in ["realtimeUsers", "organicTraffic", "topPages", "performanceMetrics"] {
            assert_eq!(data[key]["success"], true, "{} should succeed", key);
        }
        assert_eq!(data["trafficSources"]["success"], false);
        assert_eq!(data["trafficSources"]["data"], Value::Array(vec![]));
        assert!(!data["trafficSources"]["errorMessage"].as_str().unwrap().is_empty());
        assert_eq!(data["realtimeUsers"]["data"], "17");
    }

    #[tokio::test]
    async fn test_top_pages_passes_limit_through() {
        let (router, client) = router(populated_client());

        let (status, body) = get_json(router, "/api/analytics/top-pages?limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"].as_array().unwrap().len() <= 5);

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].1.limit.as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn test_organic_traffic_defaults_to_trailing_30_days() {
        let (router, client) = router(populated_client());

        let (_, body) = get_json(router, "/api/analytics/organic-traffic").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["engagedSessions"], "30");

        let requests = client.requests.lock().unwrap();
        let range = &requests[0].1.date_ranges[0];
        assert_eq!(range.start_date, "30daysAgo");
        assert_eq!(range.end_date, "today");
    }

    #[tokio::test]
    async fn test_organic_traffic_forwards_explicit_dates() {
        let (router, client) = router(populated_client());

        get_json(
            router,
            "/api/analytics/organic-traffic?startDate=2024-01-01&endDate=2024-01-31",
        )
        .await;

        let requests = client.requests.lock().unwrap();
        let range = &requests[0].1.date_ranges[0];
        assert_eq!(range.start_date, "2024-01-01");
        assert_eq!(range.end_date, "2024-01-31");
    }

    #[tokio::test]
    async fn test_connection_failure_is_not_an_http_error() {
        let client = FakeAnalyticsClient {
            failing: vec!["sessions"],
            ..populated_client()
        };
        let (router, client) = router(client);

        let (status, body) = get_json(router, "/api/analytics/test").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().starts_with("Connection failed"));
        assert_eq!(client.requests.lock().unwrap()[0].0, "properties/987");
    }

    #[tokio::test]
    async fn test_index_and_health() {
        let (router, _) = router(populated_client());
        let (status, body) = get_json(router.clone(), "/api/analytics/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["endpoints"]["dashboard"], "/api/analytics/dashboard");

        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_api_error_renders_500_envelope() {
        use crate::presentation::error::ApiError;
        use axum::response::IntoResponse;

        let task: tokio::task::JoinHandle<()> = tokio::spawn(async { panic!("query task panicked") });
        let join_error = task.await.unwrap_err();
        let error = ApiError::Dashboard(
            crate::application::report_service::AggregationError::TaskFailed {
                query: "top pages",
                source: join_error,
            },
        );

        assert_eq!(error.to_string(), "Failed to fetch analytics data");
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
