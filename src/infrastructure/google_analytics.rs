// Google Analytics Data API (GA4) client implementation
use crate::application::analytics_client::{
    AnalyticsClient, RealtimeReportRequest, ReportRequest, ReportResponse,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://analyticsdata.googleapis.com";

#[derive(Debug, Clone)]
pub struct GoogleAnalyticsClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GoogleAnalyticsClient {
    pub fn new(base_url: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// `property` is `properties/{id}`; the id part is path-encoded.
    fn build_method_url(&self, property: &str, method: &str) -> String {
        let id = property.strip_prefix("properties/").unwrap_or(property);
        format!(
            "{}/v1beta/properties/{}:{}",
            self.base_url,
            urlencoding::encode(id),
            method
        )
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        property: &str,
        method: &str,
        body: &B,
    ) -> Result<ReportResponse> {
        let url = self.build_method_url(property, method);
        tracing::debug!("Calling analytics API: {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .context("Failed to send request to Google Analytics")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{}", describe_error(status, &body));
        }

        let report = response
            .json::<ReportResponse>()
            .await
            .context("Failed to parse Google Analytics response")?;

        tracing::debug!(
            "{} returned {} rows",
            method,
            report.row_count.unwrap_or(report.rows.len() as i64)
        );
        Ok(report)
    }
}

fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(GoogleErrorBody { error }) if !error.message.is_empty() => {
            let code = error.code.unwrap_or(status.as_u16());
            match error.status {
                Some(kind) => format!("{} {}: {}", code, kind, error.message),
                None => format!("{}: {}", code, error.message),
            }
        }
        _ if body.trim().is_empty() => format!("Google Analytics request failed with status {}", status),
        _ => format!(
            "Google Analytics request failed with status {}: {}",
            status,
            body.trim()
        ),
    }
}

#[async_trait]
impl AnalyticsClient for GoogleAnalyticsClient {
    async fn run_report(&self, property: &str, request: &ReportRequest) -> Result<ReportResponse> {
        self.execute(property, "runReport", request).await
    }

    async fn run_realtime_report(
        &self,
        property: &str,
        request: &RealtimeReportRequest,
    ) -> Result<ReportResponse> {
        self.execute(property, "runRealtimeReport", request).await
    }
}
