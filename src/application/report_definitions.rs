// Report definitions - fixed dimension/metric layouts per query
use crate::application::analytics_client::{
    DateRange, FieldName, FilterExpression, RealtimeReportRequest, ReportRequest, ReportRow,
};
use anyhow::{Result, anyhow};

/// Ordered dimension and metric names of one report.
///
/// The upstream returns values positionally in request order, so every
/// column index used to read a row is resolved from these arrays with
/// [`position`]. Referencing a name that is not part of the layout fails
/// const evaluation.
pub struct ReportLayout {
    pub name: &'static str,
    pub dimensions: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

pub const fn position(names: &[&str], name: &str) -> usize {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return i;
        }
        i += 1;
    }
    panic!("field is not part of the report layout");
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl ReportLayout {
    pub const fn dimension(&self, name: &str) -> usize {
        position(self.dimensions, name)
    }

    pub const fn metric(&self, name: &str) -> usize {
        position(self.metrics, name)
    }

    pub fn request(&self, date_range: DateRange) -> ReportRequest {
        ReportRequest {
            date_ranges: vec![date_range],
            dimensions: field_names(self.dimensions),
            metrics: field_names(self.metrics),
            dimension_filter: None,
            limit: None,
        }
    }

    pub fn realtime_request(&self) -> RealtimeReportRequest {
        RealtimeReportRequest {
            dimensions: field_names(self.dimensions),
            metrics: field_names(self.metrics),
        }
    }

    pub fn dimension_value<'a>(&self, row: &'a ReportRow, index: usize) -> Result<&'a str> {
        row.dimension_values
            .get(index)
            .map(|v| v.value.as_str())
            .ok_or_else(|| {
                anyhow!(
                    "{} row is missing dimension '{}'",
                    self.name,
                    self.dimensions.get(index).copied().unwrap_or("?")
                )
            })
    }

    pub fn metric_value<'a>(&self, row: &'a ReportRow, index: usize) -> Result<&'a str> {
        row.metric_values
            .get(index)
            .map(|v| v.value.as_str())
            .ok_or_else(|| {
                anyhow!(
                    "{} row is missing metric '{}'",
                    self.name,
                    self.metrics.get(index).copied().unwrap_or("?")
                )
            })
    }
}

fn field_names(names: &[&str]) -> Vec<FieldName> {
    names
        .iter()
        .map(|name| FieldName {
            name: (*name).to_string(),
        })
        .collect()
}

pub const TRAILING_30_DAYS_START: &str = "30daysAgo";
pub const TODAY: &str = "today";
pub const TRAFFIC_SOURCES_LIMIT: u32 = 10;
pub const DEFAULT_TOP_PAGES_LIMIT: u32 = 10;

pub const REALTIME_USERS: ReportLayout = ReportLayout {
    name: "realtime users",
    dimensions: &[],
    metrics: &["activeUsers"],
};

pub mod realtime_users {
    use super::REALTIME_USERS;
    pub const ACTIVE_USERS: usize = REALTIME_USERS.metric("activeUsers");
}

pub const ORGANIC_TRAFFIC: ReportLayout = ReportLayout {
    name: "organic traffic",
    dimensions: &["date"],
    metrics: &["sessions", "engagedSessions", "engagementRate"],
};

pub mod organic_traffic {
    use super::ORGANIC_TRAFFIC;
    pub const DATE: usize = ORGANIC_TRAFFIC.dimension("date");
    pub const SESSIONS: usize = ORGANIC_TRAFFIC.metric("sessions");
    pub const ENGAGED_SESSIONS: usize = ORGANIC_TRAFFIC.metric("engagedSessions");
    pub const ENGAGEMENT_RATE: usize = ORGANIC_TRAFFIC.metric("engagementRate");

    pub const MEDIUM_FIELD: &str = "sessionMedium";
    pub const ORGANIC_MEDIUM: &str = "organic";
}

pub const TOP_PAGES: ReportLayout = ReportLayout {
    name: "top pages",
    dimensions: &["pageTitle", "pagePath"],
    metrics: &["screenPageViews", "averageSessionDuration"],
};

pub mod top_pages {
    use super::TOP_PAGES;
    pub const TITLE: usize = TOP_PAGES.dimension("pageTitle");
    pub const PATH: usize = TOP_PAGES.dimension("pagePath");
    pub const PAGE_VIEWS: usize = TOP_PAGES.metric("screenPageViews");
    pub const AVG_DURATION: usize = TOP_PAGES.metric("averageSessionDuration");
}

pub const TRAFFIC_SOURCES: ReportLayout = ReportLayout {
    name: "traffic sources",
    dimensions: &["sessionMedium"],
    metrics: &["sessions"],
};

pub mod traffic_sources {
    use super::TRAFFIC_SOURCES;
    pub const MEDIUM: usize = TRAFFIC_SOURCES.dimension("sessionMedium");
    pub const SESSIONS: usize = TRAFFIC_SOURCES.metric("sessions");
}

/// Returned to callers as raw values in this metric order.
pub const PERFORMANCE: ReportLayout = ReportLayout {
    name: "performance metrics",
    dimensions: &[],
    metrics: &["sessions", "engagementRate", "averageSessionDuration"],
};

pub mod performance {
    use super::PERFORMANCE;
    pub const SESSIONS: usize = PERFORMANCE.metric("sessions");
    pub const AVG_SESSION_DURATION: usize = PERFORMANCE.metric("averageSessionDuration");
}

pub const CONNECTION_PROBE: ReportLayout = ReportLayout {
    name: "connection probe",
    dimensions: &[],
    metrics: &["sessions"],
};

pub mod connection_probe {
    use super::CONNECTION_PROBE;
    pub const SESSIONS: usize = CONNECTION_PROBE.metric("sessions");
}

pub fn organic_traffic_request(start_date: &str, end_date: &str) -> ReportRequest {
    let mut request = ORGANIC_TRAFFIC.request(DateRange::new(start_date, end_date));
    request.dimension_filter = Some(FilterExpression::equals(
        organic_traffic::MEDIUM_FIELD,
        organic_traffic::ORGANIC_MEDIUM,
    ));
    request
}

pub fn top_pages_request(limit: u32) -> ReportRequest {
    let mut request = TOP_PAGES.request(DateRange::new(TRAILING_30_DAYS_START, TODAY));
    request.limit = Some(limit.to_string());
    request
}

pub fn traffic_sources_request() -> ReportRequest {
    let mut request = TRAFFIC_SOURCES.request(DateRange::new(TRAILING_30_DAYS_START, TODAY));
    request.limit = Some(TRAFFIC_SOURCES_LIMIT.to_string());
    request
}

pub fn performance_request() -> ReportRequest {
    PERFORMANCE.request(DateRange::new(TRAILING_30_DAYS_START, TODAY))
}

pub fn connection_probe_request(start_date: &str) -> ReportRequest {
    CONNECTION_PROBE.request(DateRange::new(start_date, TODAY))
}
