//! Acquisition slot handling.
//!
//! Imagery is published on 10-minute slots. A requested time is floored to
//! the slot it falls in, and can be stepped back one slot at a time when the
//! server has not published that slot yet.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::error::{SatError, SatResult};

/// Width of an acquisition slot in minutes.
pub const SLOT_MINUTES: u32 = 10;

/// A UTC timestamp at minute granularity used to address imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AcquisitionTime {
    instant: DateTime<Utc>,
}

impl AcquisitionTime {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Build from individual calendar fields, rejecting impossible dates.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> SatResult<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .map(Self::new)
            .ok_or_else(|| {
                SatError::parse(
                    "time",
                    format!("{:04}-{:02}-{:02} {:02}:{:02}", year, month, day, hour, minute),
                    "not a valid calendar date and time",
                )
            })
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Floor to the start of the containing slot (13:34 becomes 13:30).
    ///
    /// Seconds and sub-second precision are dropped as well, so the result
    /// is idempotent.
    pub fn round(&mut self) {
        let excess = Duration::minutes(i64::from(self.instant.minute() % SLOT_MINUTES))
            + Duration::seconds(i64::from(self.instant.second()))
            + Duration::nanoseconds(i64::from(self.instant.nanosecond()));
        self.instant = self.instant - excess;
    }

    /// Step back exactly one slot, crossing hour/day/month/year boundaries.
    ///
    /// Expects a rounded time; the result is then also slot aligned.
    pub fn rollback(&mut self) {
        self.instant = self.instant - Duration::minutes(i64::from(SLOT_MINUTES));
    }
}

impl fmt::Display for AcquisitionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format("%Y-%m-%d %H:%M UTC"))
    }
}
