// --- File: crates/medibook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared data structures

// Re-export error types and utilities for easier access
pub use error::{
    config_error, forbidden, not_found, service_unavailable, unauthorized, validation_error,
    HttpStatusCode, MedibookError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export the shared models
pub use models::{AppointmentOption, Booking, Role, User};
