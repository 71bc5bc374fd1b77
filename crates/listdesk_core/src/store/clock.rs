//! Time source for timestamps and traffic date keys.

use chrono::{DateTime, NaiveDate, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Supplies the current time to the store.
pub trait Clock {
    /// Current time as Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;

    /// Current UTC calendar day.
    fn today(&self) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.now_epoch_ms())
            .unwrap_or_default()
            .date_naive()
    }
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Manually driven clock.
///
/// Clones share one underlying time, so a handle kept outside the store can
/// move the store's clock forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_epoch_ms: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(now_epoch_ms: i64) -> Self {
        Self {
            now_epoch_ms: Rc::new(Cell::new(now_epoch_ms)),
        }
    }

    /// Starts at midnight UTC of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc().timestamp_millis())
    }

    pub fn set(&self, now_epoch_ms: i64) {
        self.now_epoch_ms.set(now_epoch_ms);
    }

    pub fn advance_ms(&self, delta_ms: i64) {
        self.now_epoch_ms
            .set(self.now_epoch_ms.get().saturating_add(delta_ms));
    }

    pub fn advance_days(&self, days: i64) {
        self.advance_ms(days.saturating_mul(24 * 60 * 60 * 1000));
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_epoch_ms.get()
    }
}
