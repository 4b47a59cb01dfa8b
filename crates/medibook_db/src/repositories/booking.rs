//! Repository for bookings
//!
//! Bookings are write-once records created by the admission controller. The
//! collection carries a unique index on (appointment_date, treatment, email);
//! the losing half of a concurrent check-then-insert fails atomically with
//! [`DbError::UniqueViolation`] instead of producing a duplicate.

use crate::error::DbError;
use async_trait::async_trait;

pub use medibook_common::models::Booking;

/// Repository for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Initialize the schema for the bookings collection if it is absent.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// Find all bookings for an exact appointment date string.
    async fn find_by_date(&self, appointment_date: &str) -> Result<Vec<Booking>, DbError>;

    /// Find all bookings made by a patient email.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, DbError>;

    /// Find bookings colliding on the admission triple.
    async fn find_conflicts(
        &self,
        appointment_date: &str,
        treatment: &str,
        email: &str,
    ) -> Result<Vec<Booking>, DbError>;

    /// Insert a booking, returning it with its store id set.
    ///
    /// Fails with [`DbError::UniqueViolation`] if a booking with the same
    /// (appointment_date, treatment, email) triple already exists.
    async fn insert(&self, booking: Booking) -> Result<Booking, DbError>;
}
