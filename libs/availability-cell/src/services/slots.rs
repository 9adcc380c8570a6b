//! Pure slot computation for a professional's working day.
//!
//! All arithmetic happens in integer minutes since midnight; dates and
//! timezones never enter here. The calling layer resolves the service
//! duration, the active schedule windows for the weekday and the booked
//! intervals, and this module turns them into an ordered slot list.

use std::collections::HashSet;

use crate::models::{AvailabilityError, BookedInterval, TimeSlot, WorkingWindow};

/// Candidate slots sit on a fixed grid starting at each window's start time,
/// independent of the service duration.
pub const SLOT_STEP_MINUTES: i32 = 15;

/// Parse an `HH:MM` or `HH:MM:SS` time into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<i32, AvailabilityError> {
    let invalid = || AvailabilityError::InvalidTime(time.to_string());

    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(invalid());
    }

    let hours: i32 = parts[0].parse().map_err(|_| invalid())?;
    let minutes: i32 = parts[1].parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    // Seconds, when present, must be well-formed but are ignored
    if let Some(seconds) = parts.get(2) {
        let seconds: i32 = seconds.parse().map_err(|_| invalid())?;
        if !(0..60).contains(&seconds) {
            return Err(invalid());
        }
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn minutes_to_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Half-open interval overlap: `[a1,a2)` and `[b1,b2)` overlap iff
/// `a1 < b2 && a2 > b1`. Touching boundaries do not overlap, so
/// back-to-back bookings are allowed.
fn overlaps(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && a_end > b_start
}

/// Walk the grid from window start, emitting every start whose slot still
/// fits inside the window. A duration longer than the window yields nothing.
fn generate_window_starts(window_start: i32, window_end: i32, duration: i32) -> Vec<i32> {
    let mut starts = Vec::new();
    let mut current = window_start;

    while current + duration <= window_end {
        starts.push(current);
        current += SLOT_STEP_MINUTES;
    }

    starts
}

/// Tag each candidate start with availability against the booked intervals.
fn annotate_slots(starts: &[i32], duration: i32, booked: &[(i32, i32)]) -> Vec<TimeSlot> {
    starts
        .iter()
        .map(|&start| {
            let end = start + duration;
            let blocked = booked
                .iter()
                .any(|&(b_start, b_end)| overlaps(start, end, b_start, b_end));

            TimeSlot {
                time: minutes_to_time(start),
                available: !blocked,
            }
        })
        .collect()
}

fn interval_to_minutes(start_time: &str, end_time: &str) -> Result<(i32, i32), AvailabilityError> {
    let start = time_to_minutes(start_time)?;
    let end = time_to_minutes(end_time)?;

    if start >= end {
        return Err(AvailabilityError::InvalidTimeRange {
            start: start_time.to_string(),
            end: end_time.to_string(),
        });
    }

    Ok((start, end))
}

/// Compute the candidate slot list for one day.
///
/// Inactive windows are dropped before validation or processing; an empty
/// active set is a valid "does not work this day" result, not an error.
/// Generation and availability tagging are separate passes so each rule can
/// be tested on its own. The merged output is deduplicated by start time
/// (first occurrence wins) and sorted ascending.
pub fn compute_available_slots(
    service_duration_minutes: i32,
    working_windows: &[WorkingWindow],
    booked_intervals: &[BookedInterval],
) -> Result<Vec<TimeSlot>, AvailabilityError> {
    if service_duration_minutes <= 0 {
        return Err(AvailabilityError::InvalidDuration(service_duration_minutes));
    }

    let active: Vec<&WorkingWindow> = working_windows.iter().filter(|w| w.is_active).collect();
    if active.is_empty() {
        return Ok(Vec::new());
    }

    let booked = booked_intervals
        .iter()
        .map(|interval| interval_to_minutes(&interval.start_time, &interval.end_time))
        .collect::<Result<Vec<_>, _>>()?;

    let mut all_slots = Vec::new();
    for window in active {
        let (window_start, window_end) = interval_to_minutes(&window.start_time, &window.end_time)?;
        let starts = generate_window_starts(window_start, window_end, service_duration_minutes);
        all_slots.extend(annotate_slots(&starts, service_duration_minutes, &booked));
    }

    let mut seen = HashSet::new();
    all_slots.retain(|slot| seen.insert(slot.time.clone()));
    all_slots.sort_by(|a, b| a.time.cmp(&b.time));

    Ok(all_slots)
}
