// File: crates/medibook_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::logic::{AvailableOption, BookingOutcome, BookingRequest, RejectionKind};
use medibook_common::models::Booking;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/appointmentOptions",
    params(
        ("date" = String, Query, description = "Appointment date to subtract bookings for", example = "2024-01-10")
    ),
    responses(
        (status = 200, description = "Remaining slots per treatment", body = Vec<AvailableOption>),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_get_appointment_options_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("email" = String, Query, description = "Patient email; must match the verified identity", example = "a@x.com")
    ),
    responses(
        (status = 200, description = "The patient's bookings", body = Vec<Booking>),
        (status = 401, description = "No credential presented"),
        (status = 403, description = "Credential invalid or email mismatch"),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body(content = BookingRequest, example = json!({
        "appointmentDate": "2024-01-10",
        "treatment": "Braces",
        "slot": "10am",
        "email": "a@x.com",
        "patientName": "Ada Lovelace"
    })),
    responses(
        (status = 200, description = "Admission outcome; rejections are soft", body = BookingOutcome,
         example = json!({
             "accepted": false,
             "reason": "You already have a booking on 2024-01-10",
             "kind": "DuplicateBooking"
         })
        ),
        (status = 400, description = "Request failed schema validation"),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_create_booking_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_appointment_options_handler,
        doc_list_bookings_handler,
        doc_create_booking_handler
    ),
    components(
        schemas(
            AvailableOption,
            BookingRequest,
            BookingOutcome,
            RejectionKind,
            Booking
        )
    ),
    tags(
        (name = "booking", description = "Appointment availability and booking API")
    )
)]
pub struct BookingApiDoc;
