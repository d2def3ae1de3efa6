//! Day rollover detection through explicit ticks.
//!
//! The caller owns the clock: it ticks the tracker with the current local
//! date, at least every [`ROLLOVER_CHECK_INTERVAL`], and reopens the canvas
//! when a new `DateKey` comes back.

use crate::model::date_key::DateKey;
use chrono::NaiveDate;
use log::info;
use std::time::Duration;

/// How often a UI should tick the tracker.
pub const ROLLOVER_CHECK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTracker {
    current: DateKey,
}

impl DayTracker {
    pub fn new(current: DateKey) -> Self {
        Self { current }
    }

    pub fn current(&self) -> &DateKey {
        &self.current
    }

    /// Returns the new key when `today` differs from the tracked day.
    pub fn tick(&mut self, today: NaiveDate) -> Option<DateKey> {
        let next = DateKey::from_date(today);
        if next == self.current {
            return None;
        }
        info!(
            "event=day_rollover module=service status=ok from={} to={next}",
            self.current
        );
        self.current = next.clone();
        Some(next)
    }

    /// Ticks with the local wall clock.
    pub fn tick_now(&mut self) -> Option<DateKey> {
        self.tick(DateKey::today().date())
    }
}
