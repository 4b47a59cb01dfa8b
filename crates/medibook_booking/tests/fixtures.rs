//! Test fixtures for booking flow tests
//!
//! Factory functions to create seeded repositories and request payloads for
//! the end-to-end booking tests.

use medibook_booking::handlers::BookingState;
use medibook_booking::logic::BookingRequest;
use medibook_common::models::AppointmentOption;
use medibook_config::{AppConfig, AuthConfig, BookingConfig};
use medibook_db::{
    AppointmentOptionRepository, MemoryAppointmentOptionRepository, MemoryBookingRepository,
};
use std::sync::Arc;

/// Creates a test AppConfig with a signing secret and the given slot policy
pub fn create_test_config(check_slot_availability: bool) -> Arc<AppConfig> {
    let mut config = AppConfig::default();
    config.auth = Some(AuthConfig {
        access_token_secret: Some("test-secret".to_string()),
        token_expiry_secs: 3600,
    });
    config.booking = Some(BookingConfig {
        check_slot_availability,
    });
    Arc::new(config)
}

/// Creates a small template with three morning slots
pub fn braces_template() -> AppointmentOption {
    AppointmentOption {
        id: None,
        name: "Braces".to_string(),
        price: 100,
        slots: vec!["9am".to_string(), "10am".to_string(), "11am".to_string()],
    }
}

/// Creates a BookingState over in-memory repositories seeded with templates
pub async fn create_booking_state(
    config: Arc<AppConfig>,
    templates: Vec<AppointmentOption>,
) -> Arc<BookingState> {
    let options_repo = Arc::new(MemoryAppointmentOptionRepository::new());
    for template in templates {
        options_repo
            .insert(template)
            .await
            .expect("seeding templates must succeed");
    }

    Arc::new(BookingState {
        config,
        options_repo,
        bookings_repo: Arc::new(MemoryBookingRepository::new()),
    })
}

/// Creates a booking request payload
pub fn create_booking_request(
    date: &str,
    treatment: &str,
    slot: &str,
    email: &str,
) -> BookingRequest {
    BookingRequest {
        appointment_date: date.to_string(),
        treatment: treatment.to_string(),
        slot: slot.to_string(),
        email: email.to_string(),
        patient_name: "Test Patient".to_string(),
    }
}
