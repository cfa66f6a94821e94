// Normalized analytics records
use serde::{Deserialize, Serialize};

/// Outcome of one analytics query.
///
/// A failed query still carries a well-typed empty `data` value so consumers
/// never have to branch on its absence; `error_message` is set iff `success`
/// is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQueryResult<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> MetricQueryResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error_message: None,
        }
    }

    pub fn failed(data: T, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "unknown upstream error".to_string()
        } else {
            message
        };

        Self {
            success: false,
            data,
            error_message: Some(message),
        }
    }

    /// Collapse a query outcome into a result, substituting `empty` on failure.
    pub fn settle(outcome: anyhow::Result<T>, empty: impl FnOnce() -> T) -> Self {
        match outcome {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(empty(), format!("{:#}", e)),
        }
    }
}

/// One page from the top-pages report. Numeric fields stay as the
/// upstream's numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRow {
    pub title: String,
    pub path: String,
    pub page_views: String,
    pub avg_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSourceRow {
    pub medium: String,
    pub sessions: String,
}

/// One day of organic traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesRow {
    pub date: String,
    pub sessions: String,
    pub engaged_sessions: String,
    pub engagement_rate: String,
}

/// Result of the connectivity probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub success: bool,
    pub message: String,
}
