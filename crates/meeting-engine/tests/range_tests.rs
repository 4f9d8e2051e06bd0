//! Tests for `TimeRange` construction, comparison, and serialization.

use std::cmp::Ordering;

use meeting_engine::{ScheduleError, TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn both_constructors_agree() {
    let a = TimeRange::from_start_duration(480, 90).unwrap();
    let b = TimeRange::from_start_end(480, 570).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.start(), 480);
    assert_eq!(a.duration(), 90);
    assert_eq!(a.end(), 570);
}

#[test]
fn whole_day_spans_every_minute() {
    let day = TimeRange::WHOLE_DAY;
    assert_eq!(day.start(), START_OF_DAY);
    assert_eq!(day.end(), END_OF_DAY);
    assert_eq!(day.duration(), DAY_LENGTH);
    assert_eq!(day, range(0, 1440));
}

#[test]
fn end_before_start_is_rejected() {
    let err = TimeRange::from_start_end(600, 540).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::EndBeforeStart {
            start: 600,
            end: 540
        }
    );
}

#[test]
fn range_past_end_of_day_is_rejected() {
    let err = TimeRange::from_start_duration(1400, 41).unwrap_err();
    assert!(matches!(err, ScheduleError::OutOfDay { end: 1441, .. }));

    assert!(TimeRange::from_start_end(0, 1441).is_err());
    assert!(TimeRange::from_start_duration(1440, 1).is_err());
}

#[test]
fn overflowing_duration_is_rejected_not_wrapped() {
    let err = TimeRange::from_start_duration(10, u32::MAX).unwrap_err();
    assert!(matches!(err, ScheduleError::OutOfDay { .. }));
}

#[test]
fn empty_range_at_end_of_day_is_allowed() {
    let r = TimeRange::from_start_duration(1440, 0).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.end(), 1440);
}

#[test]
fn error_messages_name_the_bounds() {
    let err = TimeRange::from_start_end(90, 30).unwrap_err();
    assert_eq!(err.to_string(), "Invalid range: end 30 is before start 90");

    let err = TimeRange::from_start_duration(1430, 20).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Range [1430, 1450) does not fit within a day of 1440 minutes"
    );
}

// ── Overlap and containment ─────────────────────────────────────────────────

#[test]
fn touching_ranges_do_not_overlap() {
    let a = range(0, 60);
    let b = range(60, 120);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn overlap_is_symmetric() {
    let a = range(0, 90);
    let b = range(60, 120);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn nested_ranges_overlap() {
    let outer = range(0, 300);
    let inner = range(100, 200);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn empty_range_overlaps_nothing() {
    let empty = range(100, 100);
    assert!(!empty.overlaps(&range(0, 200)));
    assert!(!range(0, 200).overlaps(&empty));
    assert!(!empty.overlaps(&empty));
}

#[test]
fn contains_point_is_half_open() {
    let r = range(60, 120);
    assert!(r.contains_point(60));
    assert!(r.contains_point(119));
    assert!(!r.contains_point(120));
    assert!(!r.contains_point(59));
}

#[test]
fn contains_range() {
    let r = range(60, 240);
    assert!(r.contains(&range(60, 240)));
    assert!(r.contains(&range(90, 120)));
    assert!(!r.contains(&range(30, 120)));
    assert!(!r.contains(&range(200, 300)));
}

#[test]
fn contains_empty_range_uses_its_start_point() {
    let r = range(60, 120);
    assert!(r.contains(&range(60, 60)));
    assert!(r.contains(&range(100, 100)));
    assert!(!r.contains(&range(120, 120)));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn natural_order_is_by_start_then_duration() {
    let mut ranges = vec![range(120, 180), range(0, 60), range(0, 30), range(60, 61)];
    ranges.sort();
    assert_eq!(
        ranges,
        vec![range(0, 30), range(0, 60), range(60, 61), range(120, 180)]
    );
}

#[test]
fn order_by_end() {
    let a = range(0, 200);
    let b = range(100, 150);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.cmp_by_end(&b), Ordering::Greater);

    let mut ranges = vec![range(0, 200), range(100, 150), range(50, 150)];
    ranges.sort_by(TimeRange::cmp_by_end);
    assert_eq!(ranges, vec![range(50, 150), range(100, 150), range(0, 200)]);
}

// ── Display and serde ───────────────────────────────────────────────────────

#[test]
fn display_is_half_open_notation() {
    assert_eq!(range(60, 120).to_string(), "[60, 120)");
}

#[test]
fn serializes_as_start_and_duration() {
    let json = serde_json::to_string(&range(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"duration":60}"#);

    let back: TimeRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range(60, 120));
}

#[test]
fn deserialization_validates_bounds() {
    let result: Result<TimeRange, _> = serde_json::from_str(r#"{"start":1400,"duration":60}"#);
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("does not fit within a day"),
        "unexpected error: {err}"
    );
}
