//! Select the events that block at least one required attendee.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::range::TimeRange;

/// Whether `event` shares at least one attendee with `required`.
///
/// An event without attendees, or an empty `required` set, is never relevant.
pub fn is_relevant(event: &Event, required: &BTreeSet<String>) -> bool {
    let (small, large) = if event.attendees.len() <= required.len() {
        (&event.attendees, required)
    } else {
        (required, &event.attendees)
    };
    small.iter().any(|name| large.contains(name))
}

/// Collect the busy ranges of every relevant event, in input order.
///
/// Events with an empty `when` occupy no time and are skipped.
pub fn relevant_ranges(events: &[Event], required: &BTreeSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| !e.when.is_empty() && is_relevant(e, required))
        .map(|e| e.when)
        .collect()
}
