//! Merge busy ranges into a sorted, non-overlapping cover.
//!
//! Ranges are sorted by start, then scanned once with an accumulator that
//! absorbs every range starting before its end. Ranges that only touch
//! (`a.end() == b.start()`) stay separate, matching half-open semantics.

use crate::range::TimeRange;

/// Consolidate `ranges` into the minimal ascending list of disjoint ranges
/// covering the same minutes.
///
/// The result does not depend on input order, and consolidating an already
/// consolidated list returns it unchanged.
///
/// ```
/// use meeting_engine::{consolidate, TimeRange};
///
/// let r = |s, e| TimeRange::from_start_end(s, e).unwrap();
/// let merged = consolidate(&[r(60, 120), r(0, 90), r(120, 180)]);
/// assert_eq!(merged, vec![r(0, 120), r(120, 180)]);
/// ```
pub fn consolidate(ranges: &[TimeRange]) -> Vec<TimeRange> {
    if ranges.len() <= 1 {
        return ranges.to_vec();
    }

    let mut sorted = ranges.to_vec();
    sorted.sort();

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];
    for next in &sorted[1..] {
        if next.start() < current.end() {
            // Union, not replacement: a range contained in `current` leaves it as is.
            if next.end() > current.end() {
                current = TimeRange::spanning(current.start(), next.end());
            }
        } else {
            merged.push(current);
            current = *next;
        }
    }
    merged.push(current);

    merged
}
