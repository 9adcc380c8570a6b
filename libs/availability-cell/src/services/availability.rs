use chrono::{Datelike, NaiveDate, Weekday};
use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{
    AvailabilityError, AvailabilityParams, BookedInterval, ServiceDurationRow, TimeSlot,
    WorkingWindow,
};
use crate::services::slots::compute_available_slots;

pub struct AvailabilityService {
    supabase: SupabaseClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Resolve the bookable slots for a professional, service and date.
    ///
    /// Fetches the service duration, the active schedule windows for the
    /// date's weekday and the blocking appointments, then hands everything
    /// to the pure slot engine.
    pub async fn get_available_slots(
        &self,
        params: &AvailabilityParams,
    ) -> Result<Vec<TimeSlot>, AvailabilityError> {
        debug!(
            "Calculating available slots for professional {} on {}",
            params.professional_id, params.date
        );

        let duration = self.fetch_service_duration(params.service_id).await?;

        let day_of_week = day_of_week_index(params.date);
        let windows = self
            .fetch_working_windows(params.professional_id, day_of_week)
            .await?;

        if windows.is_empty() {
            debug!(
                "No active working windows for professional {} on weekday {}",
                params.professional_id, day_of_week
            );
            return Ok(Vec::new());
        }

        let booked = self
            .fetch_booked_intervals(params.professional_id, params.date)
            .await?;

        let slots = compute_available_slots(duration, &windows, &booked)?;
        debug!("Computed {} candidate slots", slots.len());

        Ok(slots)
    }

    async fn fetch_service_duration(&self, service_id: Uuid) -> Result<i32, AvailabilityError> {
        let path = format!("/rest/v1/services?id=eq.{}&select=duration", service_id);
        let rows: Vec<ServiceDurationRow> = self
            .supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(|e| AvailabilityError::Database(e.to_string()))?;

        match rows.first() {
            Some(row) => Ok(row.duration),
            None => Err(AvailabilityError::ServiceNotFound),
        }
    }

    async fn fetch_working_windows(
        &self,
        professional_id: Uuid,
        day_of_week: i32,
    ) -> Result<Vec<WorkingWindow>, AvailabilityError> {
        let path = format!(
            "/rest/v1/schedules?professional_id=eq.{}&day_of_week=eq.{}&is_active=eq.true&order=start_time.asc",
            professional_id, day_of_week
        );

        self.supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(|e| AvailabilityError::Database(e.to_string()))
    }

    async fn fetch_booked_intervals(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BookedInterval>, AvailabilityError> {
        let path = format!(
            "/rest/v1/appointments?professional_id=eq.{}&date=eq.{}&status=in.(CONFIRMED,PENDING)&select=start_time,end_time",
            professional_id, date
        );

        self.supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(|e| AvailabilityError::Database(e.to_string()))
    }
}

/// Map a calendar date to the schedule table's weekday index (0 = Sunday,
/// 6 = Saturday). Pure calendar arithmetic; no timezone offset applied.
pub fn day_of_week_index(date: NaiveDate) -> i32 {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}
