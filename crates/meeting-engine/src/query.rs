//! Find meeting times for a request against a day of events.
//!
//! This module ties the three stages together: attendee filtering, busy-interval
//! consolidation, and free-window derivation. Every function is pure; the same
//! inputs always produce the same output.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consolidate::consolidate;
use crate::event::{Event, MeetingRequest};
use crate::filter::relevant_ranges;
use crate::freebusy::derive_free_windows;
use crate::range::{TimeRange, DAY_LENGTH};

/// Busy and free views of a day for one meeting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Consolidated busy intervals of the required attendees.
    pub busy: Vec<TimeRange>,
    /// Free windows long enough for the requested meeting.
    pub free: Vec<TimeRange>,
}

/// All windows of the day in which the requested meeting fits.
///
/// The result is sorted by start, pairwise non-overlapping, and every window is
/// at least `request.duration` minutes long. A request longer than a day
/// yields no windows.
///
/// ```
/// use meeting_engine::{query, Event, MeetingRequest, TimeRange};
///
/// let events = vec![Event::new(
///     "Event A",
///     TimeRange::from_start_end(60, 120).unwrap(),
///     ["x"],
/// )];
/// let request = MeetingRequest::new(30, ["x"]);
///
/// assert_eq!(
///     query(&events, &request),
///     vec![
///         TimeRange::from_start_end(0, 60).unwrap(),
///         TimeRange::from_start_end(120, 1440).unwrap(),
///     ]
/// );
/// ```
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if request.duration > DAY_LENGTH {
        debug!(
            duration = request.duration,
            "requested duration exceeds a day; no windows"
        );
        return Vec::new();
    }

    let busy = busy_windows(events, request);
    let free = derive_free_windows(request.duration, &busy);
    debug!(
        events = events.len(),
        busy = busy.len(),
        free = free.len(),
        duration = request.duration,
        "meeting query complete"
    );
    free
}

/// Consolidated busy intervals of the request's required attendees.
pub fn busy_windows(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let ranges = relevant_ranges(events, &request.attendees);
    trace!(
        relevant = ranges.len(),
        total = events.len(),
        "filtered events by attendee"
    );
    consolidate(&ranges)
}

/// The earliest window in which the requested meeting fits.
pub fn first_available(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}

/// Busy intervals and free windows for `request`, computed together.
///
/// `free` matches [`query`] and `busy` matches [`busy_windows`].
pub fn availability(events: &[Event], request: &MeetingRequest) -> Availability {
    let busy = busy_windows(events, request);
    let free = if request.duration > DAY_LENGTH {
        Vec::new()
    } else {
        derive_free_windows(request.duration, &busy)
    };
    Availability { busy, free }
}
