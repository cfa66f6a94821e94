// Frame clock backed by a tokio interval
use crate::application::dashboard_view::{FrameClock, FrameTimer};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Roughly one display refresh at 60Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct IntervalClock {
    period: Duration,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

struct IntervalTimer {
    started: Instant,
    interval: Interval,
}

#[async_trait]
impl FrameTimer for IntervalTimer {
    async fn next_frame(&mut self) -> Duration {
        self.interval.tick().await;
        self.started.elapsed()
    }
}

impl FrameClock for IntervalClock {
    fn start(&self) -> Box<dyn FrameTimer> {
        let started = Instant::now();
        let mut interval = tokio::time::interval_at(started + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Box::new(IntervalTimer { started, interval })
    }
}
