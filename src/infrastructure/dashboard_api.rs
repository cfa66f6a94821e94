// HTTP snapshot source against the dashboard backend
use crate::application::snapshot_source::{SnapshotPayload, SnapshotSource, SyncError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

pub const DASHBOARD_PATH: &str = "/api/analytics/dashboard";

#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    http: reqwest::Client,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
}

impl HttpSnapshotSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), DASHBOARD_PATH),
        }
    }
}

fn decode(status: StatusCode, body: &str) -> Result<SnapshotPayload, SyncError> {
    let envelope = match serde_json::from_str::<DashboardEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(SyncError::Upstream(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }
        Err(e) => {
            return Err(SyncError::Upstream(format!(
                "Malformed dashboard response: {}",
                e
            )));
        }
    };

    if !status.is_success() || !envelope.success {
        let fallback = if status.is_success() {
            "Failed to fetch analytics data".to_string()
        } else {
            format!("HTTP error! status: {}", status.as_u16())
        };
        return Err(SyncError::Upstream(
            envelope.error.or(envelope.message).unwrap_or(fallback),
        ));
    }

    let data = match envelope.data {
        Some(Value::Object(map)) => map,
        _ => Default::default(),
    };
    Ok(SnapshotPayload::new(data, envelope.last_updated))
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<SnapshotPayload, SyncError> {
        tracing::debug!("Fetching analytics data from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SyncError::Connectivity(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Connectivity(e.to_string()))?;

        decode(status, &body)
    }
}
