// --- File: crates/medibook_booking/src/logic.rs ---
use medibook_common::models::{AppointmentOption, Booking};
use medibook_db::{AppointmentOptionRepository, BookingRepository, DbError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Store error: {0}")]
    Store(#[from] DbError),
}

// --- Data Structures ---
/// One treatment's availability for a queried date: the template with its
/// booked slots subtracted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableOption {
    #[cfg_attr(feature = "openapi", schema(example = "Braces"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 100))]
    pub price: i64,
    /// Remaining slot labels, in the template's declared order
    pub slots: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-10"))]
    #[serde(default)]
    pub appointment_date: String,
    #[cfg_attr(feature = "openapi", schema(example = "Braces"))]
    #[serde(default)]
    pub treatment: String,
    #[cfg_attr(feature = "openapi", schema(example = "10am"))]
    #[serde(default)]
    pub slot: String,
    #[cfg_attr(feature = "openapi", schema(example = "a@x.com"))]
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub patient_name: String,
}

/// Machine-readable rejection kinds for a refused admission.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RejectionKind {
    DuplicateBooking,
    SlotUnavailable,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingOutcome {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RejectionKind>,
}

impl BookingOutcome {
    fn accepted(booking_id: Option<i64>) -> Self {
        Self {
            accepted: true,
            booking_id,
            reason: None,
            kind: None,
        }
    }

    fn rejected(kind: RejectionKind, reason: String) -> Self {
        Self {
            accepted: false,
            booking_id: None,
            reason: Some(reason),
            kind: Some(kind),
        }
    }
}

// --- Availability Logic ---

/// Subtracts booked slot labels from each template's slot list.
///
/// A slot is removed when any booking for that treatment carries its label
/// (membership test, not count-based removal). The template order and the
/// relative slot order within each template are preserved.
pub fn subtract_booked_slots(
    options: Vec<AppointmentOption>,
    booked: &[Booking],
) -> Vec<AvailableOption> {
    options
        .into_iter()
        .map(|option| {
            let AppointmentOption {
                name, price, slots, ..
            } = option;
            let booked_slots: HashSet<&str> = booked
                .iter()
                .filter(|booking| booking.treatment == name)
                .map(|booking| booking.slot.as_str())
                .collect();
            let remaining = slots
                .into_iter()
                .filter(|slot| !booked_slots.contains(slot.as_str()))
                .collect();
            AvailableOption {
                name,
                price,
                slots: remaining,
            }
        })
        .collect()
}

/// Computes remaining bookable slots per treatment for a date.
///
/// The date is matched byte-for-byte against stored bookings; an absent or
/// malformed date matches nothing, so every template comes back with its
/// full slot list. Either every template is filtered or the whole call
/// fails; no partial result is returned.
pub async fn compute_availability(
    options: &dyn AppointmentOptionRepository,
    bookings: &dyn BookingRepository,
    date: &str,
) -> Result<Vec<AvailableOption>, BookingError> {
    let templates = options.find_all().await?;
    let booked = bookings.find_by_date(date).await?;
    debug!(
        "Computing availability for {}: {} templates, {} bookings",
        date,
        templates.len(),
        booked.len()
    );
    Ok(subtract_booked_slots(templates, &booked))
}

// --- Admission Logic ---

/// Rejects requests with missing or empty required fields before they reach
/// admission.
pub fn validate_request(request: &BookingRequest) -> Result<(), BookingError> {
    let required = [
        ("appointmentDate", &request.appointment_date),
        ("treatment", &request.treatment),
        ("slot", &request.slot),
        ("email", &request.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(BookingError::Validation(format!(
                "{field} must not be empty"
            )));
        }
    }
    Ok(())
}

fn duplicate_reason(date: &str) -> String {
    format!("You already have a booking on {date}")
}

/// Admits a booking request: at most one booking per
/// (appointment date, treatment, email) triple.
///
/// The conflict read gives the friendly rejection on the common path; the
/// store's unique index on the triple decides races between concurrent
/// submissions, and the losing insert is reported as the same duplicate
/// rejection. Exactly one record is inserted on acceptance, none on
/// rejection.
///
/// When `check_slot_availability` is set, the requested slot must still be
/// among the treatment's remaining slots at submission time; otherwise the
/// availability and uniqueness checks stay independent of each other.
pub async fn submit_booking(
    options: &dyn AppointmentOptionRepository,
    bookings: &dyn BookingRepository,
    check_slot_availability: bool,
    request: BookingRequest,
) -> Result<BookingOutcome, BookingError> {
    validate_request(&request)?;

    if check_slot_availability {
        let available = compute_availability(options, bookings, &request.appointment_date).await?;
        let offered = available
            .iter()
            .find(|option| option.name == request.treatment)
            .map(|option| option.slots.contains(&request.slot))
            .unwrap_or(false);
        if !offered {
            debug!(
                "Rejecting booking for unavailable slot {} ({})",
                request.slot, request.treatment
            );
            return Ok(BookingOutcome::rejected(
                RejectionKind::SlotUnavailable,
                format!(
                    "Slot {} is not available for {} on {}",
                    request.slot, request.treatment, request.appointment_date
                ),
            ));
        }
    }

    let conflicts = bookings
        .find_conflicts(&request.appointment_date, &request.treatment, &request.email)
        .await?;
    if !conflicts.is_empty() {
        return Ok(BookingOutcome::rejected(
            RejectionKind::DuplicateBooking,
            duplicate_reason(&request.appointment_date),
        ));
    }

    let booking = Booking {
        id: None,
        appointment_date: request.appointment_date.clone(),
        treatment: request.treatment,
        slot: request.slot,
        email: request.email,
        patient_name: request.patient_name,
    };

    match bookings.insert(booking).await {
        Ok(stored) => Ok(BookingOutcome::accepted(stored.id)),
        // A concurrent submission won the race between our check and insert
        Err(e) if e.is_unique_violation() => Ok(BookingOutcome::rejected(
            RejectionKind::DuplicateBooking,
            duplicate_reason(&request.appointment_date),
        )),
        Err(e) => Err(BookingError::Store(e)),
    }
}
