// libs/availability-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AvailabilityError, AvailabilityParams};
use crate::services::availability::AvailabilityService;

/// Query parameters for the booking form's availability lookup.
/// Missing or malformed parameters are rejected by the extractor with a 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let availability_service = AvailabilityService::new(&state);

    let params = AvailabilityParams {
        professional_id: query.professional_id,
        service_id: query.service_id,
        date: query.date,
    };

    let slots = availability_service
        .get_available_slots(&params)
        .await
        .map_err(|e| match e {
            AvailabilityError::ServiceNotFound => {
                AppError::NotFound("Service not found".to_string())
            }
            AvailabilityError::InvalidDuration(_)
            | AvailabilityError::InvalidTime(_)
            | AvailabilityError::InvalidTimeRange { .. } => AppError::BadRequest(e.to_string()),
            AvailabilityError::Database(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(json!({
        "slots": slots
    })))
}
