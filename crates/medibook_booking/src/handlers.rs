// File: crates/medibook_booking/src/handlers.rs
use crate::logic::{
    compute_availability, submit_booking, AvailableOption, BookingError, BookingOutcome,
    BookingRequest,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use medibook_auth::Claims;
use medibook_common::models::Booking;
use medibook_config::AppConfig;
use medibook_db::{AppointmentOptionRepository, BookingRepository};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

// Define shared state needed by the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub options_repo: Arc<dyn AppointmentOptionRepository>,
    pub bookings_repo: Arc<dyn BookingRepository>,
}

#[derive(Deserialize, Debug)]
pub struct AvailabilityQuery {
    /// Appointment date; an absent date matches no bookings, so every
    /// template comes back with its full slot list
    #[serde(default)]
    pub date: String,
}

/// Handler to get remaining appointment options for a date.
#[axum::debug_handler]
pub async fn get_appointment_options_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<AvailableOption>>, (StatusCode, String)> {
    match compute_availability(
        state.options_repo.as_ref(),
        state.bookings_repo.as_ref(),
        &query.date,
    )
    .await
    {
        Ok(options) => Ok(Json(options)),
        Err(e) => {
            info!("Error computing availability: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to query appointment availability".to_string(),
            ))
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct BookingsQuery {
    pub email: String,
}

/// Handler to list a patient's bookings.
///
/// Runs behind the identity middleware; the queried email must match the
/// verified claim exactly.
#[axum::debug_handler]
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingState>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, (StatusCode, String)> {
    if query.email != claims.email {
        return Err((StatusCode::FORBIDDEN, "Forbidden Access".to_string()));
    }

    match state.bookings_repo.find_by_email(&query.email).await {
        Ok(bookings) => Ok(Json(bookings)),
        Err(e) => {
            info!("Error listing bookings: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to list bookings".to_string(),
            ))
        }
    }
}

/// Handler to submit a booking.
///
/// A refused admission (duplicate or unavailable slot) is a soft rejection:
/// HTTP 200 with `accepted: false` and a reason in the body.
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingOutcome>, (StatusCode, String)> {
    let check_slot_availability = state
        .config
        .booking
        .as_ref()
        .map(|booking| booking.check_slot_availability)
        .unwrap_or(false);

    match submit_booking(
        state.options_repo.as_ref(),
        state.bookings_repo.as_ref(),
        check_slot_availability,
        payload,
    )
    .await
    {
        Ok(outcome) => Ok(Json(outcome)),
        Err(BookingError::Validation(message)) => Err((StatusCode::BAD_REQUEST, message)),
        Err(e) => {
            info!("Error submitting booking: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to submit booking".to_string(),
            ))
        }
    }
}
