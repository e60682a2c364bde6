//! Bounded daily hydration counter with date-keyed reset.
//!
//! The tracker is an in-memory mirror of the persisted
//! [`HydrationRecord`](crate::profile::HydrationRecord); the profile is
//! the single source of truth. The mirror is reinitialized at mount and
//! refreshed after every write, so it only diverges for the instant an
//! update is in flight.

use chrono::{Local, NaiveDate};

use crate::profile::HydrationRecord;

/// Number of glasses rendered as glyphs. The count itself is not
/// hard-capped above this.
pub const DISPLAY_GLYPHS: u32 = 8;

/// Default daily goal.
pub const DEFAULT_GOAL: u32 = 8;

/// Outcome of the once-per-session day-boundary check.
#[derive(Debug, Clone, PartialEq)]
pub enum DayBoundary {
    /// Stored record is from an earlier calendar day; the zeroed record
    /// must be written back before any other read.
    Stale(HydrationRecord),
    /// Stored record is from today; adopt its count unchanged.
    Current(u32),
    /// No record yet; defaults apply and nothing needs writing.
    Missing,
}

/// Compare the record's local calendar date against `today`.
///
/// Day granularity, calendar comparison -- not a rolling 24 hours.
pub fn day_boundary(record: Option<&HydrationRecord>, today: NaiveDate) -> DayBoundary {
    match record {
        None => DayBoundary::Missing,
        Some(record) => {
            let record_date = record.last_updated.with_timezone(&Local).date_naive();
            if record_date == today {
                DayBoundary::Current(record.count)
            } else {
                DayBoundary::Stale(HydrationRecord::fresh(0, record.goal.max(DEFAULT_GOAL)))
            }
        }
    }
}

/// In-memory mirror of the day's count.
#[derive(Debug, Clone)]
pub struct HydrationTracker {
    count: u32,
    goal: u32,
}

impl Default for HydrationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL)
    }
}

impl HydrationTracker {
    pub fn new(goal: u32) -> Self {
        Self { count: 0, goal }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Refresh the mirror from a persisted record (or defaults if none).
    pub fn resync(&mut self, record: Option<&HydrationRecord>) {
        self.count = record.map(|r| r.count).unwrap_or(0);
    }

    /// Apply a delta, clamped at zero. Returns the record stamped now
    /// that the coordinator forwards as a point-in-time overwrite.
    pub fn adjust(&mut self, delta: i32) -> HydrationRecord {
        self.count = if delta.is_negative() {
            self.count.saturating_sub(delta.unsigned_abs())
        } else {
            self.count + delta as u32
        };
        HydrationRecord::fresh(self.count, self.goal)
    }
}
