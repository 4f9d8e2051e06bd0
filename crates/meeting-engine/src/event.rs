//! Calendar inputs: existing events and the meeting being requested.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// An existing calendar event occupying a range of the day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Display title. Not used by the scheduling logic.
    pub name: String,
    /// When the event takes place.
    pub when: TimeRange,
    /// Everyone attending the event.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request for a meeting of `duration` minutes that every attendee must join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Required length of the meeting, in minutes.
    pub duration: u32,
    /// Required attendees.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(duration: u32, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}
