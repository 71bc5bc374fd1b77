//! Per-day traffic attribution model.
//!
//! # Invariants
//! - At most one record exists per `(name, date)` pair.
//! - `visits` is at least 1 for every stored record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a traffic record.
pub type TrafficSourceId = Uuid;

/// Source name recorded when a public tracking link is opened.
pub const SHARED_LINK_SOURCE: &str = "Shared Link";

/// Visit counter for one named channel on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSource {
    pub id: TrafficSourceId,
    pub name: String,
    pub visits: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl TrafficSource {
    /// Creates the first visit for `name` on `date`.
    pub fn first_visit(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            visits: 1,
            date,
        }
    }

    pub fn matches(&self, name: &str, date: NaiveDate) -> bool {
        self.name == name && self.date == date
    }
}
