//! A single observed visit interval.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;

/// Start and end instants of one visit.
///
/// `end >= start` is expected from the export but not enforced; a reversed
/// range yields a negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeRange {
    pub const fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub const fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Time elapsed between start and end.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
