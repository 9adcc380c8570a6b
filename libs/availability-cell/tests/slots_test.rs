// libs/availability-cell/tests/slots_test.rs
//
// Scenario tests for the pure slot engine: grid generation, overlap
// tagging, multi-window merging and input validation.

use availability_cell::models::{AvailabilityError, BookedInterval, TimeSlot, WorkingWindow};
use availability_cell::services::slots::{
    compute_available_slots, minutes_to_time, time_to_minutes,
};

fn window(start: &str, end: &str) -> WorkingWindow {
    WorkingWindow {
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_active: true,
    }
}

fn inactive_window(start: &str, end: &str) -> WorkingWindow {
    WorkingWindow {
        is_active: false,
        ..window(start, end)
    }
}

fn booking(start: &str, end: &str) -> BookedInterval {
    BookedInterval {
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn times(slots: &[TimeSlot]) -> Vec<&str> {
    slots.iter().map(|s| s.time.as_str()).collect()
}

fn slot<'a>(slots: &'a [TimeSlot], time: &str) -> &'a TimeSlot {
    slots
        .iter()
        .find(|s| s.time == time)
        .unwrap_or_else(|| panic!("no slot at {}", time))
}

// ==============================================================================
// GRID GENERATION
// ==============================================================================

#[test]
fn open_window_emits_every_quarter_hour_start_that_fits() {
    let slots = compute_available_slots(60, &[window("09:00", "12:00")], &[]).unwrap();

    assert_eq!(
        times(&slots),
        vec![
            "09:00", "09:15", "09:30", "09:45", "10:00", "10:15", "10:30", "10:45", "11:00"
        ]
    );
    assert!(slots.iter().all(|s| s.available));
}

#[test]
fn last_start_is_the_one_whose_slot_ends_exactly_at_window_end() {
    let slots = compute_available_slots(30, &[window("09:00", "10:00")], &[]).unwrap();

    // 09:30 + 30 == 10:00 fits; 09:45 + 30 would overrun
    assert_eq!(times(&slots), vec!["09:00", "09:15", "09:30"]);
}

#[test]
fn service_longer_than_window_yields_no_slots() {
    let slots = compute_available_slots(90, &[window("09:00", "10:00")], &[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn no_windows_yields_empty_output_not_an_error() {
    let slots = compute_available_slots(30, &[], &[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn inactive_windows_are_ignored() {
    let slots =
        compute_available_slots(30, &[inactive_window("09:00", "12:00")], &[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn postgrest_time_with_seconds_is_accepted() {
    let slots = compute_available_slots(60, &[window("09:00:00", "11:00:00")], &[]).unwrap();
    assert_eq!(times(&slots), vec!["09:00", "09:15", "09:30", "09:45", "10:00"]);
}

// ==============================================================================
// AVAILABILITY TAGGING
// ==============================================================================

#[test]
fn booking_blocks_every_overlapping_slot_but_not_touching_ones() {
    let slots = compute_available_slots(
        60,
        &[window("09:00", "12:00")],
        &[booking("10:00", "11:00")],
    )
    .unwrap();

    // Ends exactly at the booking start: no overlap
    assert!(slot(&slots, "09:00").available);
    // 09:15-10:15 and 09:30-10:30 run into the booking
    assert!(!slot(&slots, "09:15").available);
    assert!(!slot(&slots, "09:30").available);
    assert!(!slot(&slots, "09:45").available);
    assert!(!slot(&slots, "10:00").available);
    assert!(!slot(&slots, "10:45").available);
    // Starts exactly at the booking end: no overlap
    assert!(slot(&slots, "11:00").available);
}

#[test]
fn back_to_back_bookings_leave_the_rest_of_the_day_open() {
    let slots = compute_available_slots(
        60,
        &[window("09:00", "12:00")],
        &[booking("09:00", "10:00"), booking("10:00", "11:00")],
    )
    .unwrap();

    assert!(!slot(&slots, "09:00").available);
    assert!(!slot(&slots, "10:00").available);
    assert!(!slot(&slots, "10:45").available);
    assert!(slot(&slots, "11:00").available);
}

#[test]
fn double_booked_intervals_are_each_checked_independently() {
    let slots = compute_available_slots(
        30,
        &[window("09:00", "11:00")],
        &[booking("09:00", "10:00"), booking("09:30", "10:30")],
    )
    .unwrap();

    assert!(!slot(&slots, "09:45").available);
    assert!(!slot(&slots, "10:00").available); // blocked by the second booking only
    assert!(slot(&slots, "10:30").available);
}

#[test]
fn fully_booked_day_is_a_valid_all_unavailable_result() {
    let slots = compute_available_slots(
        30,
        &[window("09:00", "10:00")],
        &[booking("08:00", "12:00")],
    )
    .unwrap();

    assert_eq!(times(&slots), vec!["09:00", "09:15", "09:30"]);
    assert!(slots.iter().all(|s| !s.available));
}

// ==============================================================================
// MULTI-WINDOW MERGING
// ==============================================================================

#[test]
fn split_shift_windows_are_merged_and_sorted() {
    let slots = compute_available_slots(
        30,
        &[window("14:00", "16:00"), window("09:00", "11:00")],
        &[],
    )
    .unwrap();

    assert_eq!(
        times(&slots),
        vec![
            "09:00", "09:15", "09:30", "09:45", "10:00", "10:15", "10:30", "14:00", "14:15",
            "14:30", "14:45", "15:00", "15:15", "15:30"
        ]
    );
}

#[test]
fn overlapping_windows_emit_each_start_time_once() {
    let slots = compute_available_slots(
        30,
        &[window("09:00", "10:00"), window("09:30", "10:30")],
        &[],
    )
    .unwrap();

    assert_eq!(times(&slots), vec!["09:00", "09:15", "09:30", "09:45", "10:00"]);
}

#[test]
fn identical_inputs_give_identical_output() {
    let windows = [window("09:00", "11:00"), window("13:00", "15:00")];
    let booked = [booking("09:30", "10:00")];

    let first = compute_available_slots(45, &windows, &booked).unwrap();
    let second = compute_available_slots(45, &windows, &booked).unwrap();

    assert_eq!(first, second);
}

// ==============================================================================
// INPUT VALIDATION
// ==============================================================================

#[test]
fn non_positive_duration_is_rejected() {
    let result = compute_available_slots(0, &[window("09:00", "12:00")], &[]);
    assert!(matches!(result, Err(AvailabilityError::InvalidDuration(0))));

    let result = compute_available_slots(-15, &[window("09:00", "12:00")], &[]);
    assert!(matches!(result, Err(AvailabilityError::InvalidDuration(-15))));
}

#[test]
fn malformed_window_time_is_rejected() {
    let result = compute_available_slots(30, &[window("9h00", "12:00")], &[]);
    assert!(matches!(result, Err(AvailabilityError::InvalidTime(_))));
}

#[test]
fn window_with_inverted_range_is_rejected() {
    let result = compute_available_slots(30, &[window("12:00", "09:00")], &[]);
    assert!(matches!(
        result,
        Err(AvailabilityError::InvalidTimeRange { .. })
    ));
}

#[test]
fn booked_interval_with_inverted_range_is_rejected() {
    let result = compute_available_slots(
        30,
        &[window("09:00", "12:00")],
        &[booking("11:00", "10:00")],
    );
    assert!(matches!(
        result,
        Err(AvailabilityError::InvalidTimeRange { .. })
    ));
}

#[test]
fn malformed_inactive_window_cannot_fail_a_request() {
    let slots =
        compute_available_slots(30, &[inactive_window("garbage", "12:00"), window("09:00", "10:00")], &[])
            .unwrap();
    assert_eq!(times(&slots), vec!["09:00", "09:15", "09:30"]);
}

// ==============================================================================
// TIME HELPERS
// ==============================================================================

#[test]
fn time_parsing_accepts_both_wire_forms() {
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(time_to_minutes("09:30").unwrap(), 570);
    assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    assert_eq!(time_to_minutes("09:30:00").unwrap(), 570);
}

#[test]
fn time_parsing_rejects_out_of_range_and_garbage() {
    for input in ["24:00", "12:60", "12", "12:00:60", "ab:cd", "", "12:00:00:00"] {
        assert!(
            matches!(time_to_minutes(input), Err(AvailabilityError::InvalidTime(_))),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn minutes_format_is_zero_padded() {
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(570), "09:30");
    assert_eq!(minutes_to_time(1439), "23:59");
}
