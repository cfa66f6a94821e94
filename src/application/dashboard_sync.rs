// Dashboard sync - Applies dashboard snapshots to the widget view
use crate::application::dashboard_view::{
    DashboardView, FrameClock, FrameTimer, Notification, NotificationKind, PageTableRow,
    TableBody, Widget,
};
use crate::application::report_definitions::performance;
use crate::application::snapshot_source::{SnapshotPayload, SnapshotSource, SyncError};
use crate::domain::display::{
    ease_out_quart, format_count, format_duration, format_percent, parse_displayed_value,
    parse_numeric_or_default,
};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);
pub const EMPTY_TABLE_MESSAGE: &str = "No page data available. Connect to Google Analytics first.";
pub const REFRESHED_MESSAGE: &str = "Data refreshed successfully!";
pub const CONNECTIVITY_MESSAGE: &str =
    "Cannot connect to server. Please make sure the backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Fetching,
    Applying,
    Failed,
}

#[derive(Debug)]
pub enum RefreshOutcome {
    /// Snapshot applied; handles of the gauge animations started for it
    Refreshed(Vec<JoinHandle<()>>),
    Failed(SyncError),
    /// A refresh was already in flight
    Busy,
}

impl RefreshOutcome {
    /// Animations of an applied snapshot. A failed or skipped refresh is an
    /// error.
    pub fn into_animations(self) -> anyhow::Result<Vec<JoinHandle<()>>> {
        match self {
            RefreshOutcome::Refreshed(animations) => Ok(animations),
            RefreshOutcome::Failed(e) => anyhow::bail!("refresh failed: {}", e),
            RefreshOutcome::Busy => anyhow::bail!("refresh skipped: another refresh is in flight"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeFormat {
    Count,
    Percent,
}

impl GaugeFormat {
    fn render(&self, value: f64) -> String {
        match self {
            GaugeFormat::Count => format_count(value),
            GaugeFormat::Percent => format_percent(value),
        }
    }
}

/// Eased transition of one numeric gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeAnimation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub format: GaugeFormat,
}

impl GaugeAnimation {
    pub fn new(from: f64, to: f64, duration: Duration, format: GaugeFormat) -> Self {
        Self {
            from,
            to,
            duration,
            format,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * ease_out_quart(progress)
    }

    /// Render one sample per frame until the transition completes.
    pub async fn run(
        self,
        widget: Widget,
        view: Arc<dyn DashboardView>,
        mut timer: Box<dyn FrameTimer>,
    ) {
        loop {
            let progress = self.progress(timer.next_frame().await);
            view.set_text(widget, self.format.render(self.value_at(progress)));
            if progress >= 1.0 {
                break;
            }
        }
    }
}

pub struct DashboardSync {
    source: Arc<dyn SnapshotSource>,
    view: Arc<dyn DashboardView>,
    clock: Arc<dyn FrameClock>,
    state: Mutex<RefreshState>,
}

impl DashboardSync {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        view: Arc<dyn DashboardView>,
        clock: Arc<dyn FrameClock>,
    ) -> Self {
        Self {
            source,
            view,
            clock,
            state: Mutex::new(RefreshState::Idle),
        }
    }

    pub fn state(&self) -> RefreshState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// One user-triggered refresh. Not re-entrant: a call made while another
    /// refresh is fetching or applying returns [`RefreshOutcome::Busy`].
    pub async fn refresh(&self) -> RefreshOutcome {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if *state != RefreshState::Idle {
                tracing::debug!("Refresh ignored while {:?}", *state);
                return RefreshOutcome::Busy;
            }
            *state = RefreshState::Fetching;
        }
        self.view.set_busy(true);

        let outcome = match self.source.fetch_snapshot().await {
            Ok(payload) => {
                self.transition(RefreshState::Applying);
                let animations = self.apply_snapshot(&payload);
                self.view.notify(Notification {
                    kind: NotificationKind::Success,
                    message: REFRESHED_MESSAGE.to_string(),
                });
                RefreshOutcome::Refreshed(animations)
            }
            Err(e) => {
                self.transition(RefreshState::Failed);
                tracing::warn!("Dashboard refresh failed: {}", e);
                let message = match &e {
                    SyncError::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
                    SyncError::Upstream(msg) => format!("Failed to refresh data: {}", msg),
                };
                self.view.notify(Notification {
                    kind: NotificationKind::Error,
                    message,
                });
                RefreshOutcome::Failed(e)
            }
        };

        self.transition(RefreshState::Idle);
        self.view.set_busy(false);
        outcome
    }

    /// Update every facet independently; a missing facet resets its widget
    /// to zero and never blocks the others.
    pub fn apply_snapshot(&self, payload: &SnapshotPayload) -> Vec<JoinHandle<()>> {
        let mut animations = Vec::new();
        tracing::debug!(
            "Applying snapshot last updated {}",
            payload.last_updated.as_deref().unwrap_or("unknown")
        );

        match realtime_users(payload) {
            Some(users) => {
                animations.push(self.animate(Widget::RealTimeUsers, users, GaugeFormat::Count))
            }
            None => {
                tracing::warn!("No realtimeUsers data found");
                self.view.set_text(Widget::RealTimeUsers, "0".to_string());
            }
        }

        match total_sessions(payload) {
            Some(sessions) => {
                animations.push(self.animate(Widget::TotalSessions, sessions, GaugeFormat::Count))
            }
            None => {
                tracing::warn!("No sessions data found");
                self.view.set_text(Widget::TotalSessions, "0".to_string());
            }
        }

        // Durations are set directly, interpolating "1m 5s" is meaningless
        let duration = avg_session_duration(payload).unwrap_or(0.0);
        self.view.set_text(Widget::AvgDuration, format_duration(duration));

        match bounce_rate(payload) {
            Some(rate) => {
                animations.push(self.animate(Widget::BounceRate, rate, GaugeFormat::Percent))
            }
            None => self.view.set_text(Widget::BounceRate, "0%".to_string()),
        }

        self.view.replace_table(page_table(payload));

        animations
    }

    fn animate(&self, widget: Widget, target: f64, format: GaugeFormat) -> JoinHandle<()> {
        let from = self
            .view
            .text(widget)
            .map(|text| parse_displayed_value(&text))
            .unwrap_or(0.0);
        let animation = GaugeAnimation::new(from, target, ANIMATION_DURATION, format);

        tokio::spawn(animation.run(widget, self.view.clone(), self.clock.start()))
    }

    fn transition(&self, to: RefreshState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

/// Inner value of a `{success, data}` query result, or the field itself
/// when it is not wrapped.
fn unwrap_result(field: &Value) -> Option<&Value> {
    let inner = match field.as_object() {
        Some(obj) if obj.contains_key("data") => obj.get("data"),
        Some(obj) if obj.contains_key("value") => obj.get("value"),
        _ => Some(field),
    };
    inner.filter(|v| !v.is_null())
}

/// `{"value": ..}` cells as returned in upstream metric arrays collapse to
/// their value.
fn scalar(value: &Value) -> Option<&Value> {
    let value = match value.as_object() {
        Some(obj) => obj.get("value")?,
        None => value,
    };
    (!value.is_null()).then_some(value)
}

fn named_or_positional<'a>(
    data: &'a Value,
    names: &[&str],
    index: Option<usize>,
) -> Option<&'a Value> {
    match data {
        Value::Object(obj) => names.iter().find_map(|name| obj.get(*name).and_then(scalar)),
        Value::Array(values) => index.and_then(|i| values.get(i)).and_then(scalar),
        _ => None,
    }
}

fn facet(payload: &SnapshotPayload, key: &str) -> Option<Value> {
    payload.field(key).and_then(unwrap_result).cloned()
}

fn performance_value(
    payload: &SnapshotPayload,
    names: &[&str],
    index: Option<usize>,
) -> Option<f64> {
    let data = facet(payload, "performanceMetrics")?;
    named_or_positional(&data, names, index).map(|v| parse_numeric_or_default(v, 0.0))
}

pub(crate) fn realtime_users(payload: &SnapshotPayload) -> Option<f64> {
    facet(payload, "realtimeUsers")
        .as_ref()
        .and_then(scalar)
        .map(|v| parse_numeric_or_default(v, 0.0))
}

/// Aggregate organic sessions: either a reported total or the sum of the
/// daily rows. Absent when there are no rows.
pub(crate) fn organic_sessions(payload: &SnapshotPayload) -> Option<f64> {
    match facet(payload, "organicTraffic")? {
        Value::Object(obj) => obj
            .get("sessions")
            .and_then(scalar)
            .map(|v| parse_numeric_or_default(v, 0.0)),
        Value::Array(rows) if !rows.is_empty() => Some(
            rows.iter()
                .map(|row| {
                    row.get("sessions")
                        .map(|v| parse_numeric_or_default(v, 0.0))
                        .unwrap_or(0.0)
                })
                .sum(),
        ),
        _ => None,
    }
}

/// Organic sessions first, then the performance sessions figure.
pub(crate) fn total_sessions(payload: &SnapshotPayload) -> Option<f64> {
    organic_sessions(payload)
        .or_else(|| performance_value(payload, &["sessions"], Some(performance::SESSIONS)))
}

pub(crate) fn avg_session_duration(payload: &SnapshotPayload) -> Option<f64> {
    performance_value(
        payload,
        &["averageSessionDuration", "avgSessionDuration"],
        Some(performance::AVG_SESSION_DURATION),
    )
}

pub(crate) fn bounce_rate(payload: &SnapshotPayload) -> Option<f64> {
    performance_value(payload, &["bounceRate"], None)
}

fn first_text<'a>(row: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| row.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

fn first_number(row: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| row.get(*key).filter(|v| !v.is_null()))
        .map(|v| parse_numeric_or_default(v, 0.0))
        .unwrap_or(0.0)
}

/// Full table rebuild from the snapshot's page rows.
pub(crate) fn page_table(payload: &SnapshotPayload) -> TableBody {
    let rows: Vec<PageTableRow> = facet(payload, "topPages")
        .as_ref()
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(Value::as_object)
                .map(|row| PageTableRow {
                    page: first_text(row, &["title", "pageTitle", "path", "url"])
                        .unwrap_or("N/A")
                        .to_string(),
                    path: first_text(row, &["path", "pagePath"])
                        .unwrap_or_default()
                        .to_string(),
                    views: format_count(first_number(row, &["pageViews", "sessions", "visits"])),
                    avg_duration: format_duration(first_number(
                        row,
                        &["avgDuration", "avgSessionDuration", "duration"],
                    )),
                })
                .collect()
        })
        .unwrap_or_default();

    if rows.is_empty() {
        TableBody::Placeholder(EMPTY_TABLE_MESSAGE)
    } else {
        TableBody::Rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::board_view::BoardView;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Notify;

    struct StepClock(Duration);

    struct StepTimer {
        elapsed: Duration,
        step: Duration,
    }

    #[async_trait]
    impl FrameTimer for StepTimer {
        async fn next_frame(&mut self) -> Duration {
            tokio::task::yield_now().await;
            self.elapsed += self.step;
            self.elapsed
        }
    }

    impl FrameClock for StepClock {
        fn start(&self) -> Box<dyn FrameTimer> {
            Box::new(StepTimer {
                elapsed: Duration::ZERO,
                step: self.0,
            })
        }
    }

    struct StaticSource(Result<SnapshotPayload, SyncError>);

    #[async_trait]
    impl SnapshotSource for StaticSource {
        async fn fetch_snapshot(&self) -> Result<SnapshotPayload, SyncError> {
            self.0.clone()
        }
    }

    struct GatedSource(Arc<Notify>);

    #[async_trait]
    impl SnapshotSource for GatedSource {
        async fn fetch_snapshot(&self) -> Result<SnapshotPayload, SyncError> {
            self.0.notified().await;
            Ok(SnapshotPayload::default())
        }
    }

    /// Records every text written so animation samples can be inspected.
    #[derive(Default)]
    struct RecordingView {
        writes: Mutex<Vec<(Widget, String)>>,
    }

    impl DashboardView for RecordingView {
        fn text(&self, widget: Widget) -> Option<String> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(w, _)| *w == widget)
                .map(|(_, t)| t.clone())
        }
        fn set_text(&self, widget: Widget, text: String) {
            self.writes.lock().unwrap().push((widget, text));
        }
        fn replace_table(&self, _body: TableBody) {}
        fn set_busy(&self, _busy: bool) {}
        fn notify(&self, _notification: Notification) {}
    }

    fn payload(data: Value) -> SnapshotPayload {
        SnapshotPayload::new(data.as_object().cloned().unwrap_or_default(), None)
    }

    fn sync_with(source: impl SnapshotSource + 'static, view: Arc<dyn DashboardView>) -> DashboardSync {
        DashboardSync::new(
            Arc::new(source),
            view,
            Arc::new(StepClock(Duration::from_millis(250))),
        )
    }

    fn server_payload() -> SnapshotPayload {
        payload(json!({
            "realtimeUsers": {"success": true, "data": "1234"},
            "organicTraffic": {"success": true, "data": [
                {"date": "20240501", "sessions": "40", "engagedSessions": "30", "engagementRate": "0.7"},
                {"date": "20240502", "sessions": "102", "engagedSessions": "80", "engagementRate": "0.8"}
            ]},
            "topPages": {"success": true, "data": [
                {"title": "Home", "path": "/", "pageViews": "4200", "avgDuration": "65"},
                {"title": "", "path": "/blog", "pageViews": "17", "avgDuration": "12.9"}
            ]},
            "trafficSources": {"success": true, "data": []},
            "performanceMetrics": {"success": true, "data": ["151", "0.62", "95.4"]}
        }))
    }

    #[test]
    fn test_gauge_animation_hits_endpoints_and_is_monotone() {
        let animation = GaugeAnimation::new(
            parse_displayed_value("100"),
            250.0,
            ANIMATION_DURATION,
            GaugeFormat::Count,
        );

        assert_eq!(animation.value_at(0.0), 100.0);
        assert_eq!(animation.value_at(1.0), 250.0);

        let mut previous = animation.value_at(0.0);
        for ms in (0..=1000).step_by(16) {
            let sample = animation.value_at(animation.progress(Duration::from_millis(ms)));
            assert!(sample >= previous);
            previous = sample;
        }
        assert_eq!(animation.progress(Duration::from_millis(1700)), 1.0);
    }

    #[tokio::test]
    async fn test_animation_run_ends_on_target() {
        let view = Arc::new(RecordingView::default());
        let animation = GaugeAnimation::new(100.0, 250.0, ANIMATION_DURATION, GaugeFormat::Count);
        let clock = StepClock(Duration::from_millis(300));

        animation
            .run(Widget::TotalSessions, view.clone(), clock.start())
            .await;

        let writes = view.writes.lock().unwrap();
        let values: Vec<f64> = writes.iter().map(|(_, t)| parse_displayed_value(t)).collect();
        assert_eq!(values.len(), 4);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(writes.last().unwrap().1, "250");
    }

    #[test]
    fn test_total_sessions_prefers_organic_aggregate() {
        let p = payload(json!({
            "organicTraffic": {"data": {"sessions": "142"}},
            "performanceMetrics": {"data": {"sessions": null}}
        }));
        assert_eq!(total_sessions(&p), Some(142.0));

        let p = payload(json!({
            "organicTraffic": {"data": {"sessions": "142"}},
            "performanceMetrics": {"data": {"sessions": "900"}}
        }));
        assert_eq!(total_sessions(&p), Some(142.0));
    }

    #[test]
    fn test_total_sessions_falls_back_to_performance_then_zero() {
        let p = payload(json!({
            "organicTraffic": {"success": false, "data": [], "errorMessage": "denied"},
            "performanceMetrics": {"success": true, "data": ["151", "0.62", "95.4"]}
        }));
        assert_eq!(total_sessions(&p), Some(151.0));

        assert_eq!(total_sessions(&payload(json!({}))), None);
    }

    #[test]
    fn test_organic_rows_are_summed() {
        assert_eq!(organic_sessions(&server_payload()), Some(142.0));
    }

    #[test]
    fn test_facets_tolerate_mistyped_values() {
        let p = payload(json!({
            "realtimeUsers": {"data": "lots"},
            "performanceMetrics": {"data": [{"value": "12"}, null, true]}
        }));
        assert_eq!(realtime_users(&p), Some(0.0));
        assert_eq!(total_sessions(&p), Some(12.0));
        assert_eq!(avg_session_duration(&p), Some(0.0));
        assert_eq!(bounce_rate(&p), None);
    }

    #[test]
    fn test_null_duration_alias_falls_through_to_next_name() {
        let p = payload(json!({
            "performanceMetrics": {"data": {"averageSessionDuration": null, "avgSessionDuration": "65"}}
        }));
        assert_eq!(avg_session_duration(&p), Some(65.0));
    }

    #[test]
    fn test_empty_page_list_renders_single_placeholder() {
        let body = page_table(&payload(json!({"topPages": {"success": true, "data": []}})));
        assert_eq!(body, TableBody::Placeholder(EMPTY_TABLE_MESSAGE));
        assert_eq!(body.row_count(), 1);

        assert_eq!(page_table(&payload(json!({}))).row_count(), 1);
    }

    #[test]
    fn test_page_table_formats_rows() {
        match page_table(&server_payload()) {
            TableBody::Rows(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].page, "Home");
                assert_eq!(rows[0].views, "4,200");
                assert_eq!(rows[0].avg_duration, "1m 5s");
                assert_eq!(rows[1].page, "/blog");
                assert_eq!(rows[1].avg_duration, "12s");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_apply_snapshot_updates_every_widget() {
        let view = Arc::new(BoardView::new());
        let sync = sync_with(StaticSource(Ok(SnapshotPayload::default())), view.clone());

        for handle in sync.apply_snapshot(&server_payload()) {
            handle.await.unwrap();
        }

        assert_eq!(view.text(Widget::RealTimeUsers).as_deref(), Some("1,234"));
        assert_eq!(view.text(Widget::TotalSessions).as_deref(), Some("142"));
        assert_eq!(view.text(Widget::AvgDuration).as_deref(), Some("1m 35s"));
        assert_eq!(view.text(Widget::BounceRate).as_deref(), Some("0%"));
        assert_eq!(view.table().row_count(), 2);
    }

    #[tokio::test]
    async fn test_apply_empty_snapshot_zeroes_widgets() {
        let view = Arc::new(BoardView::new());
        view.set_text(Widget::TotalSessions, "500".to_string());
        let sync = sync_with(StaticSource(Ok(SnapshotPayload::default())), view.clone());

        let animations = sync.apply_snapshot(&SnapshotPayload::default());

        assert!(animations.is_empty());
        assert_eq!(view.text(Widget::RealTimeUsers).as_deref(), Some("0"));
        assert_eq!(view.text(Widget::TotalSessions).as_deref(), Some("0"));
        assert_eq!(view.text(Widget::AvgDuration).as_deref(), Some("0s"));
        assert_eq!(view.text(Widget::BounceRate).as_deref(), Some("0%"));
        assert_eq!(view.table(), TableBody::Placeholder(EMPTY_TABLE_MESSAGE));
    }

    #[tokio::test]
    async fn test_bounce_rate_animates_as_percentage() {
        let view = Arc::new(BoardView::new());
        let sync = sync_with(StaticSource(Ok(SnapshotPayload::default())), view.clone());
        let p = payload(json!({"performanceMetrics": {"data": {"bounceRate": "41.26"}}}));

        for handle in sync.apply_snapshot(&p) {
            handle.await.unwrap();
        }
        assert_eq!(view.text(Widget::BounceRate).as_deref(), Some("41.3%"));
    }

    #[tokio::test]
    async fn test_refresh_success_notifies_and_returns_to_idle() {
        let view = Arc::new(BoardView::new());
        let sync = sync_with(StaticSource(Ok(server_payload())), view.clone());

        match sync.refresh().await {
            RefreshOutcome::Refreshed(animations) => assert_eq!(animations.len(), 2),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(sync.state(), RefreshState::Idle);
        assert!(!view.is_busy());
        let note = view.last_notification().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, REFRESHED_MESSAGE);
    }

    #[tokio::test]
    async fn test_refresh_failure_distinguishes_connectivity_from_upstream() {
        let view = Arc::new(BoardView::new());
        let sync = sync_with(
            StaticSource(Err(SyncError::Connectivity("refused".into()))),
            view.clone(),
        );
        assert!(matches!(sync.refresh().await, RefreshOutcome::Failed(SyncError::Connectivity(_))));
        assert_eq!(view.last_notification().unwrap().message, CONNECTIVITY_MESSAGE);
        assert_eq!(sync.state(), RefreshState::Idle);

        let sync = sync_with(
            StaticSource(Err(SyncError::Upstream("Failed to fetch analytics data".into()))),
            view.clone(),
        );
        assert!(matches!(sync.refresh().await, RefreshOutcome::Failed(SyncError::Upstream(_))));
        let note = view.last_notification().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Failed to refresh data: Failed to fetch analytics data");
        assert!(!view.is_busy());
    }

    #[tokio::test]
    async fn test_failed_refresh_has_no_animations() {
        let view = Arc::new(BoardView::new());
        let sync = sync_with(
            StaticSource(Err(SyncError::Upstream("Failed to fetch analytics data".into()))),
            view.clone(),
        );

        let err = sync.refresh().await.into_animations().unwrap_err();
        assert_eq!(err.to_string(), "refresh failed: Failed to fetch analytics data");

        let sync = sync_with(
            StaticSource(Err(SyncError::Connectivity("refused".into()))),
            view.clone(),
        );
        let err = sync.refresh().await.into_animations().unwrap_err();
        assert_eq!(
            err.to_string(),
            "refresh failed: cannot reach dashboard backend: refused"
        );

        assert!(RefreshOutcome::Busy.into_animations().is_err());
    }

    #[tokio::test]
    async fn test_refresh_is_not_reentrant_while_fetching() {
        let gate = Arc::new(Notify::new());
        let view = Arc::new(BoardView::new());
        let sync = Arc::new(sync_with(GatedSource(gate.clone()), view.clone()));

        let first = {
            let sync = sync.clone();
            tokio::spawn(async move { sync.refresh().await })
        };
        while sync.state() != RefreshState::Fetching {
            tokio::task::yield_now().await;
        }
        assert!(view.is_busy());
        assert!(matches!(sync.refresh().await, RefreshOutcome::Busy));

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), RefreshOutcome::Refreshed(_)));
        assert_eq!(sync.state(), RefreshState::Idle);
    }
}
