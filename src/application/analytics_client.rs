// Client trait for the external analytics reporting API
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// A dimension or metric reference by API name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field_name: String,
    pub string_filter: StringFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterExpression {
    pub filter: Filter,
}

impl FilterExpression {
    pub fn equals(field_name: &str, value: &str) -> Self {
        Self {
            filter: Filter {
                field_name: field_name.to_string(),
                string_filter: StringFilter {
                    value: value.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_ranges: Vec<DateRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<FieldName>,
    pub metrics: Vec<FieldName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,
    /// The API takes the row limit as a string-encoded int64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeReportRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<FieldName>,
    pub metrics: Vec<FieldName>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ReportValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimension_values: Vec<ReportValue>,
    #[serde(default)]
    pub metric_values: Vec<ReportValue>,
}

/// Report body as returned by both report endpoints. `rows` is omitted by
/// the API when the report is empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    pub row_count: Option<i64>,
}

#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// Run a historical report against `property` (`properties/{id}`)
    async fn run_report(&self, property: &str, request: &ReportRequest)
    -> anyhow::Result<ReportResponse>;

    /// Run a realtime report against `property`
    async fn run_realtime_report(
        &self,
        property: &str,
        request: &RealtimeReportRequest,
    ) -> anyhow::Result<ReportResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_request_wire_shape() {
        let request = ReportRequest {
            date_ranges: vec![DateRange::new("7daysAgo", "today")],
            dimensions: vec![FieldName { name: "date".into() }],
            metrics: vec![FieldName { name: "sessions".into() }],
            dimension_filter: Some(FilterExpression::equals("sessionMedium", "organic")),
            limit: Some("5".into()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "dateRanges": [{"startDate": "7daysAgo", "endDate": "today"}],
                "dimensions": [{"name": "date"}],
                "metrics": [{"name": "sessions"}],
                "dimensionFilter": {
                    "filter": {"fieldName": "sessionMedium", "stringFilter": {"value": "organic"}}
                },
                "limit": "5"
            })
        );
    }

    #[test]
    fn test_empty_report_response_has_no_rows() {
        let response: ReportResponse =
            serde_json::from_value(json!({"kind": "analyticsData#runReport"})).unwrap();
        assert!(response.rows.is_empty());
    }
}
