// View and frame-clock traits driven by the dashboard sync client
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    RealTimeUsers,
    TotalSessions,
    AvgDuration,
    BounceRate,
}

impl Widget {
    pub const ALL: [Widget; 4] = [
        Widget::RealTimeUsers,
        Widget::TotalSessions,
        Widget::AvgDuration,
        Widget::BounceRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Widget::RealTimeUsers => "Real-time users",
            Widget::TotalSessions => "Total sessions",
            Widget::AvgDuration => "Avg. duration",
            Widget::BounceRate => "Bounce rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageTableRow {
    pub page: String,
    pub path: String,
    pub views: String,
    pub avg_duration: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<PageTableRow>),
    Placeholder(&'static str),
}

impl TableBody {
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Widget surface shared by the refresh flow and every running animation.
pub trait DashboardView: Send + Sync {
    /// Currently displayed text, `None` if the widget does not exist
    fn text(&self, widget: Widget) -> Option<String>;

    fn set_text(&self, widget: Widget, text: String);

    fn replace_table(&self, body: TableBody);

    /// Toggle the busy indicator and disable the refresh trigger
    fn set_busy(&self, busy: bool);

    fn notify(&self, notification: Notification);
}

/// Per-frame timing for animations.
#[async_trait]
pub trait FrameTimer: Send {
    /// Wait for the next frame; returns time elapsed since the timer started
    async fn next_frame(&mut self) -> Duration;
}

pub trait FrameClock: Send + Sync {
    fn start(&self) -> Box<dyn FrameTimer>;
}
