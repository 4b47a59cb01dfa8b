// --- File: crates/medibook_booking/src/routes.rs ---

use crate::handlers::{
    create_booking_handler, get_appointment_options_handler, list_bookings_handler, BookingState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use medibook_auth::{require_identity, AuthState};
use medibook_config::AppConfig;
use medibook_db::{AppointmentOptionRepository, BookingRepository};
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
///
/// `GET /bookings` runs behind the identity middleware; availability and
/// booking submission are open endpoints.
pub fn routes(
    config: Arc<AppConfig>,
    options_repo: Arc<dyn AppointmentOptionRepository>,
    bookings_repo: Arc<dyn BookingRepository>,
) -> Router {
    let auth_state = Arc::new(AuthState {
        config: config.clone(),
    });
    let booking_state = Arc::new(BookingState {
        config,
        options_repo,
        bookings_repo,
    });

    let protected = Router::new()
        .route("/bookings", get(list_bookings_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_identity));

    Router::new()
        .route("/appointmentOptions", get(get_appointment_options_handler))
        .route("/bookings", post(create_booking_handler))
        .merge(protected)
        .with_state(booking_state)
}
