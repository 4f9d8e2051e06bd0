//! Derive free windows from consolidated busy intervals.
//!
//! Walks the busy intervals with a cursor starting at the beginning of the day
//! and emits each gap (before the first interval, between intervals, after the
//! last) that is long enough to hold the requested meeting.

use crate::range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Free windows of at least `min_duration` minutes around `busy`.
///
/// `busy` is expected sorted ascending and disjoint, as produced by
/// [`consolidate`](crate::consolidate). Empty gaps are never emitted, even for
/// a zero-minute request.
pub fn derive_free_windows(min_duration: u32, busy: &[TimeRange]) -> Vec<TimeRange> {
    if busy.is_empty() {
        return if TimeRange::WHOLE_DAY.duration() >= min_duration {
            vec![TimeRange::WHOLE_DAY]
        } else {
            Vec::new()
        };
    }

    let mut free = Vec::new();
    let mut cursor = START_OF_DAY;

    for interval in busy {
        if let Some(gap) = candidate(cursor, interval.start(), min_duration) {
            free.push(gap);
        }
        cursor = cursor.max(interval.end());
    }

    // Trailing gap after the last busy interval.
    if let Some(gap) = candidate(cursor, END_OF_DAY, min_duration) {
        free.push(gap);
    }

    free
}

/// The earliest free window of at least `min_duration` minutes around `busy`.
pub fn find_first_window(min_duration: u32, busy: &[TimeRange]) -> Option<TimeRange> {
    derive_free_windows(min_duration, busy).into_iter().next()
}

/// `[start, end)` if it is non-empty and at least `min_duration` long.
fn candidate(start: u32, end: u32, min_duration: u32) -> Option<TimeRange> {
    if start >= end || end - start < min_duration {
        return None;
    }
    Some(TimeRange::spanning(start, end))
}
