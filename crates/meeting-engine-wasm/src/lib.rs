//! WASM bindings for meeting-engine.
//!
//! Exposes meeting-window search and busy-block consolidation to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TimeRangeDto {
    start: u32,
    duration: u32,
    end: u32,
}

impl From<&TimeRange> for TimeRangeDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            duration: r.duration(),
            end: r.end(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the JSON inputs shared by every export.
///
/// `events_json` is an array of `{name, when: {start, duration}, attendees}`;
/// `request_json` is `{duration, attendees}`.
fn parse_inputs(events_json: &str, request_json: &str) -> Result<(Vec<Event>, MeetingRequest), String> {
    let events: Vec<Event> =
        serde_json::from_str(events_json).map_err(|e| format!("Invalid events JSON: {}", e))?;
    let request: MeetingRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {}", e))?;
    Ok((events, request))
}

fn ranges_to_json(ranges: &[TimeRange]) -> Result<String, String> {
    let dtos: Vec<TimeRangeDto> = ranges.iter().map(TimeRangeDto::from).collect();
    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

/// Free windows as a JSON array, without the JS error wrapper.
pub fn meeting_times_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let (events, request) = parse_inputs(events_json, request_json)?;
    ranges_to_json(&meeting_engine::query(&events, &request))
}

/// Consolidated busy blocks as a JSON array, without the JS error wrapper.
pub fn busy_windows_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let (events, request) = parse_inputs(events_json, request_json)?;
    ranges_to_json(&meeting_engine::busy_windows(&events, &request))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window of the day in which the requested meeting fits.
///
/// Returns a JSON string containing an array of `{start, duration, end}`
/// objects, in minutes from midnight, sorted by start.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    meeting_times_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Consolidated busy blocks of the request's required attendees.
///
/// The request's `duration` is ignored. Returns the same JSON shape as
/// [`find_meeting_times`].
#[wasm_bindgen(js_name = "busyWindows")]
pub fn busy_windows(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    busy_windows_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}
