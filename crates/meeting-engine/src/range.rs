//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] is an immutable `[start, start + duration)` interval measured
//! in minutes from midnight. Every constructed range lies inside
//! `[START_OF_DAY, END_OF_DAY]`; the checked constructors reject anything else.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Number of minutes in a day.
pub const DAY_LENGTH: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day.
pub const END_OF_DAY: u32 = DAY_LENGTH;

/// A half-open interval of minutes within a single day.
///
/// Ordering is by start ascending, then by duration, which gives the total
/// order the consolidator relies on. Use [`TimeRange::cmp_by_end`] when the
/// end minute matters first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    // Field order drives the derived `Ord`: start first, then duration.
    start: u32,
    duration: u32,
}

/// Wire shape of a [`TimeRange`]. Deserialization is validated through
/// [`TimeRange::from_start_duration`].
#[derive(Serialize, Deserialize)]
struct RawRange {
    start: u32,
    duration: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_duration(raw.start, raw.duration)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            duration: range.duration,
        }
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        duration: DAY_LENGTH,
    };

    /// Build a range from a start minute and a duration.
    ///
    /// ```
    /// use meeting_engine::TimeRange;
    ///
    /// let standup = TimeRange::from_start_duration(540, 15).unwrap();
    /// assert_eq!(standup.end(), 555);
    /// assert!(TimeRange::from_start_duration(1430, 30).is_err());
    /// ```
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = u64::from(start) + u64::from(duration);
        if end > u64::from(DAY_LENGTH) {
            return Err(ScheduleError::OutOfDay {
                start,
                end,
                day_length: DAY_LENGTH,
            });
        }
        Ok(Self { start, duration })
    }

    /// Build a range from a start minute and an exclusive end minute.
    pub fn from_start_end(start: u32, end: u32) -> Result<Self> {
        if end < start {
            return Err(ScheduleError::EndBeforeStart { start, end });
        }
        Self::from_start_duration(start, end - start)
    }

    /// Build a range whose bounds the caller has already validated.
    pub(crate) fn spanning(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= DAY_LENGTH, "[{start}, {end}) out of day");
        Self {
            start,
            duration: end - start,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// Whether `other` lies entirely within this range.
    ///
    /// An empty range is contained when its start point is.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        self.start <= other.start && other.end() <= self.end()
    }

    /// Whether the two half-open intervals share at least one minute.
    ///
    /// Ranges that merely touch (`a.end() == b.start()`) do not overlap, and an
    /// empty range overlaps nothing.
    ///
    /// ```
    /// use meeting_engine::TimeRange;
    ///
    /// let a = TimeRange::from_start_end(0, 60).unwrap();
    /// let b = TimeRange::from_start_end(60, 120).unwrap();
    /// let c = TimeRange::from_start_end(30, 90).unwrap();
    /// assert!(!a.overlaps(&b));
    /// assert!(a.overlaps(&c) && c.overlaps(&b));
    /// ```
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }

    /// Order by end minute ascending, then by start.
    pub fn cmp_by_end(&self, other: &TimeRange) -> Ordering {
        self.end()
            .cmp(&other.end())
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
