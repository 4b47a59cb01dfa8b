// --- File: crates/medibook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all MediBook errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for MedibookError.
#[derive(Error, Debug)]
pub enum MedibookError {
    /// No credential was presented where one is required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A credential was presented but carries insufficient privilege
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The booking admission invariant was violated by an existing record
    #[error("Duplicate booking: {0}")]
    DuplicateBooking(String),

    /// The underlying store is unreachable or erroring
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A request body or query failed schema validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A referenced resource does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// A resource already exists
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for MedibookError {
    fn status_code(&self) -> u16 {
        match self {
            MedibookError::Unauthorized(_) => 401,
            MedibookError::Forbidden(_) => 403,
            MedibookError::DuplicateBooking(_) => 409,
            MedibookError::ServiceUnavailable(_) => 503,
            MedibookError::ValidationError(_) => 400,
            MedibookError::NotFoundError(_) => 404,
            MedibookError::ConflictError(_) => 409,
            MedibookError::ConfigError(_) => 500,
            MedibookError::InternalError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for MedibookError {
    fn from(err: serde_json::Error) -> Self {
        MedibookError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for MedibookError {
    fn from(err: std::io::Error) -> Self {
        MedibookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn unauthorized<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::Unauthorized(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::Forbidden(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::NotFoundError(message.to_string())
}

pub fn service_unavailable<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::ServiceUnavailable(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> MedibookError {
    MedibookError::ConfigError(message.to_string())
}
