//! Instructor availability resolution.
//!
//! For a calendar day, classifies every instructor on the roster as on
//! leave, booked, or free. Pure over the snapshot it is given: no retained
//! state, identical inputs always produce identical output.
//!
//! Precedence: the manual leave flag wins over any scheduled event. That can
//! hide a real scheduling conflict (an event booked onto an instructor who
//! then goes on leave still reads OnLeave), but it is the established policy
//! and is preserved deliberately.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Instructor, TrainingEvent};
use crate::util::day_of;

/// Per-day classification of one instructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    OnLeave,
    Booked,
    Free,
}

/// One instructor's resolved status for a queried day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorAvailability {
    pub instructor: Instructor,
    pub status: AvailabilityStatus,
    /// Title of the booking event. Only set for [`AvailabilityStatus::Booked`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
}

/// Day-level density counts backing calendar indicators, so the view does
/// not re-derive per instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Distinct names of instructors booked that day, in roster order.
    pub booked: Vec<String>,
    /// Names of instructors on leave, in roster order.
    pub on_leave: Vec<String>,
}

impl DaySummary {
    pub fn booked_count(&self) -> usize {
        self.booked.len()
    }

    pub fn on_leave_count(&self) -> usize {
        self.on_leave.len()
    }
}

/// True when `date` falls inside the event's inclusive day range.
///
/// Endpoints are normalized to their calendar day; time-of-day never
/// participates, since events span whole days. Unparseable endpoints never
/// match.
fn event_covers(event: &TrainingEvent, date: NaiveDate) -> bool {
    match (day_of(&event.start_date), day_of(&event.end_date)) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Resolve one instructor's status for a calendar day.
///
/// When several events cover the same instructor and day (a double booking),
/// the first event in stored order wins; the surfaced title is therefore
/// deterministic across calls for the same snapshot.
pub fn resolve_instructor(
    date: NaiveDate,
    instructor: &Instructor,
    events: &[TrainingEvent],
) -> InstructorAvailability {
    if instructor.is_on_leave {
        return InstructorAvailability {
            instructor: instructor.clone(),
            status: AvailabilityStatus::OnLeave,
            event_title: None,
        };
    }

    // Exact name-string match against the denormalized event field.
    let booking = events
        .iter()
        .find(|e| e.instructor_name == instructor.name && event_covers(e, date));

    match booking {
        Some(event) => InstructorAvailability {
            instructor: instructor.clone(),
            status: AvailabilityStatus::Booked,
            event_title: Some(event.title.clone()),
        },
        None => InstructorAvailability {
            instructor: instructor.clone(),
            status: AvailabilityStatus::Free,
            event_title: None,
        },
    }
}

/// Resolve the whole roster for a calendar day, in roster order.
pub fn resolve_day(
    date: NaiveDate,
    instructors: &[Instructor],
    events: &[TrainingEvent],
) -> Vec<InstructorAvailability> {
    instructors
        .iter()
        .map(|instructor| resolve_instructor(date, instructor, events))
        .collect()
}

/// Aggregate booked/on-leave counts and name lists for a calendar day.
pub fn day_summary(
    date: NaiveDate,
    instructors: &[Instructor],
    events: &[TrainingEvent],
) -> DaySummary {
    let mut booked = Vec::new();
    let mut on_leave = Vec::new();

    for resolved in resolve_day(date, instructors, events) {
        match resolved.status {
            AvailabilityStatus::Booked => booked.push(resolved.instructor.name),
            AvailabilityStatus::OnLeave => on_leave.push(resolved.instructor.name),
            AvailabilityStatus::Free => {}
        }
    }

    DaySummary {
        date,
        booked,
        on_leave,
    }
}

/// Events whose *start* day equals `date`, in stored order.
///
/// Feeds the calendar day cells, which mark the day an event begins rather
/// than every day it spans.
pub fn events_on<'a>(date: NaiveDate, events: &'a [TrainingEvent]) -> Vec<&'a TrainingEvent> {
    events
        .iter()
        .filter(|e| day_of(&e.start_date) == Some(date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrainingEventStatus;

    fn instructor(name: &str, on_leave: bool) -> Instructor {
        Instructor {
            id: format!("INS-{}", name),
            name: name.to_string(),
            specialty: "General".to_string(),
            is_on_leave: on_leave,
            email: None,
            phone: None,
        }
    }

    fn event(title: &str, instructor: &str, start: &str, end: &str) -> TrainingEvent {
        TrainingEvent {
            id: format!("EVT-{}", title),
            opportunity_id: String::new(),
            instructor_name: instructor.to_string(),
            title: title.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            status: TrainingEventStatus::Scheduled,
        }
    }

    fn day(s: &str) -> NaiveDate {
        day_of(s).unwrap()
    }

    #[test]
    fn booked_within_inclusive_range_free_outside() {
        let ins = [instructor("A", false)];
        let events = [event(
            "Workshop X",
            "A",
            "2024-06-15T09:00:00",
            "2024-06-16T17:00:00",
        )];

        for d in ["2024-06-15", "2024-06-16"] {
            let r = resolve_instructor(day(d), &ins[0], &events);
            assert_eq!(r.status, AvailabilityStatus::Booked, "day {}", d);
            assert_eq!(r.event_title.as_deref(), Some("Workshop X"));
        }
        for d in ["2024-06-14", "2024-06-17"] {
            let r = resolve_instructor(day(d), &ins[0], &events);
            assert_eq!(r.status, AvailabilityStatus::Free, "day {}", d);
            assert_eq!(r.event_title, None);
        }
    }

    #[test]
    fn leave_overrides_booking() {
        let ins = instructor("B", true);
        let events = [event("Covered", "B", "2024-06-15", "2024-06-15")];
        let r = resolve_instructor(day("2024-06-15"), &ins, &events);
        assert_eq!(r.status, AvailabilityStatus::OnLeave);
        assert_eq!(r.event_title, None);
    }

    #[test]
    fn on_leave_for_every_date_regardless_of_events() {
        let ins = instructor("B", true);
        let events = [event("Span", "B", "2024-01-01", "2024-12-31")];
        for d in ["2024-01-01", "2024-06-15", "2024-12-31", "2025-03-01"] {
            let r = resolve_instructor(day(d), &ins, &events);
            assert_eq!(r.status, AvailabilityStatus::OnLeave, "day {}", d);
        }
    }

    #[test]
    fn no_event_no_leave_is_free() {
        let ins = instructor("C", false);
        let r = resolve_instructor(day("2030-01-01"), &ins, &[]);
        assert_eq!(r.status, AvailabilityStatus::Free);
    }

    #[test]
    fn name_match_is_exact() {
        let ins = instructor("Dana", false);
        let events = [event("Other", "Dana R.", "2024-06-15", "2024-06-15")];
        let r = resolve_instructor(day("2024-06-15"), &ins, &events);
        assert_eq!(r.status, AvailabilityStatus::Free);
    }

    #[test]
    fn double_booking_surfaces_first_stored_event() {
        let ins = instructor("A", false);
        let events = [
            event("First", "A", "2024-06-15", "2024-06-15"),
            event("Second", "A", "2024-06-15", "2024-06-15"),
        ];
        for _ in 0..3 {
            let r = resolve_instructor(day("2024-06-15"), &ins, &events);
            assert_eq!(r.event_title.as_deref(), Some("First"));
        }
    }

    #[test]
    fn unparseable_event_dates_never_match() {
        let ins = instructor("A", false);
        let events = [event("Broken", "A", "soon", "2024-06-15")];
        let r = resolve_instructor(day("2024-06-15"), &ins, &events);
        assert_eq!(r.status, AvailabilityStatus::Free);
    }

    #[test]
    fn resolver_is_idempotent_over_unchanged_input() {
        let roster = [instructor("A", false), instructor("B", true)];
        let events = [event("Workshop X", "A", "2024-06-15", "2024-06-16")];
        let first = resolve_day(day("2024-06-15"), &roster, &events);
        let second = resolve_day(day("2024-06-15"), &roster, &events);
        let a = serde_json::to_value(&first).unwrap();
        let b = serde_json::to_value(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn day_summary_counts_distinct_roster_entries() {
        let roster = [
            instructor("A", false),
            instructor("B", true),
            instructor("C", false),
        ];
        let events = [
            event("Workshop X", "A", "2024-06-15", "2024-06-16"),
            // Second event for A on the same day must not double-count.
            event("Extra", "A", "2024-06-15", "2024-06-15"),
        ];
        let summary = day_summary(day("2024-06-15"), &roster, &events);
        assert_eq!(summary.booked, vec!["A".to_string()]);
        assert_eq!(summary.booked_count(), 1);
        assert_eq!(summary.on_leave, vec!["B".to_string()]);
        assert_eq!(summary.on_leave_count(), 1);
    }

    #[test]
    fn events_on_matches_start_day_only() {
        let events = [
            event("Spans", "A", "2024-06-14T09:00:00", "2024-06-16T17:00:00"),
            event("Starts", "B", "2024-06-15T09:00:00", "2024-06-15T17:00:00"),
        ];
        let on_15th = events_on(day("2024-06-15"), &events);
        assert_eq!(on_15th.len(), 1);
        assert_eq!(on_15th[0].title, "Starts");
    }
}
