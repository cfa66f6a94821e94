// In-memory widget board, rendered as text by the terminal client
use crate::application::dashboard_view::{
    DashboardView, Notification, TableBody, Widget,
};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct BoardState {
    widgets: HashMap<Widget, String>,
    table: TableBody,
    busy: bool,
    notifications: Vec<Notification>,
}

#[derive(Debug)]
pub struct BoardView {
    state: Mutex<BoardState>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        let widgets = Widget::ALL
            .iter()
            .map(|w| {
                let initial = match w {
                    Widget::AvgDuration => "0s",
                    Widget::BounceRate => "0%",
                    _ => "0",
                };
                (*w, initial.to_string())
            })
            .collect();

        Self {
            state: Mutex::new(BoardState {
                widgets,
                table: TableBody::Rows(Vec::new()),
                busy: false,
                notifications: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn table(&self) -> TableBody {
        self.lock().table.clone()
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    #[cfg(test)]
    pub fn last_notification(&self) -> Option<Notification> {
        self.lock().notifications.last().cloned()
    }

    pub fn render(&self) -> String {
        let state = self.lock();
        let mut out = String::new();

        for widget in Widget::ALL {
            let text = state.widgets.get(&widget).map(String::as_str).unwrap_or("-");
            let _ = writeln!(out, "{:<16} {}", widget.label(), text);
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<40} {:<24} {:>10} {:>10}",
            "Page", "Path", "Views", "Avg. time"
        );
        match &state.table {
            TableBody::Rows(rows) => {
                for row in rows {
                    let _ = writeln!(
                        out,
                        "{:<40} {:<24} {:>10} {:>10}",
                        truncate(&row.page, 40),
                        truncate(&row.path, 24),
                        row.views,
                        row.avg_duration
                    );
                }
            }
            TableBody::Placeholder(message) => {
                let _ = writeln!(out, "{}", message);
            }
        }

        for note in &state.notifications {
            let _ = writeln!(out, "{}", note);
        }

        out
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

impl DashboardView for BoardView {
    fn text(&self, widget: Widget) -> Option<String> {
        self.lock().widgets.get(&widget).cloned()
    }

    fn set_text(&self, widget: Widget, text: String) {
        self.lock().widgets.insert(widget, text);
    }

    fn replace_table(&self, body: TableBody) {
        self.lock().table = body;
    }

    fn set_busy(&self, busy: bool) {
        self.lock().busy = busy;
    }

    fn notify(&self, notification: Notification) {
        tracing::info!("{}", notification);
        self.lock().notifications.push(notification);
    }
}
