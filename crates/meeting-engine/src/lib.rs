//! # meeting-engine
//!
//! Find the windows of a day in which a meeting can be scheduled.
//!
//! Given the day's events (each with a time range and a set of attendees) and
//! a meeting request (a duration and the attendees who must join), the engine
//! keeps only the events involving a required attendee, merges their busy
//! ranges, and returns the gaps long enough for the meeting. Times are integer
//! minutes from midnight in `[0, 1440)`.
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` half-open minute intervals and day constants
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`filter`] — Select events that involve a required attendee
//! - [`consolidate`](mod@consolidate) — Merge overlapping busy ranges
//! - [`freebusy`] — Derive free windows from busy ranges
//! - [`query`](mod@query) — The full pipeline
//! - [`error`] — Error types

pub mod consolidate;
pub mod error;
pub mod event;
pub mod filter;
pub mod freebusy;
pub mod query;
pub mod range;

pub use consolidate::consolidate;
pub use error::ScheduleError;
pub use event::{Event, MeetingRequest};
pub use filter::{is_relevant, relevant_ranges};
pub use freebusy::{derive_free_windows, find_first_window};
pub use query::{availability, busy_windows, first_available, query, Availability};
pub use range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};
