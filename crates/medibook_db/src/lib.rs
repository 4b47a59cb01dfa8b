//! Document store integration for MediBook
//!
//! This crate provides the store client and the repositories for the three
//! collections the backend operates on: appointment option templates,
//! bookings, and users. The client is database agnostic, using SQLx as the
//! underlying library; SQLite is the default backend, PostgreSQL and MySQL
//! are available through feature flags.
//!
//! The bookings collection carries a unique index on
//! (appointment_date, treatment, email), so the admission controller's
//! check-then-insert sequence cannot produce duplicates under concurrency:
//! the losing insert fails with [`error::DbError::UniqueViolation`].

pub mod client;
pub mod error;
pub mod repositories;

// Re-export the client and error for ease of use
pub use client::DbClient;
pub use error::DbError;

// Re-export the repositories module components for ease of use
pub use repositories::{
    AppointmentOption, AppointmentOptionRepository, Booking, BookingRepository,
    MemoryAppointmentOptionRepository, MemoryBookingRepository, MemoryUserRepository, Role,
    SqlAppointmentOptionRepository, SqlBookingRepository, SqlUserRepository, User, UserRepository,
};
