use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// One working-hours entry from a professional's weekly schedule, as stored
/// in the `schedules` table. A professional may have several per weekday
/// (split morning/afternoon shifts). Times are `HH:MM`; PostgREST emits
/// `HH:MM:SS` for `time` columns and both forms are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

/// An existing appointment's occupied interval. The caller filters by
/// professional, date and status (CONFIRMED/PENDING); every interval handed
/// to the engine blocks availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedInterval {
    pub start_time: String,
    pub end_time: String,
}

/// Projection of the `services` table used by the duration lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDurationRow {
    pub duration: i32,
}

/// A candidate booking slot. `time` marks the slot start; the slot runs for
/// the service duration from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct AvailabilityParams {
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Service duration must be positive, got {0}")]
    InvalidDuration(i32),

    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Service not found")]
    ServiceNotFound,

    #[error("Database error: {0}")]
    Database(String),
}
