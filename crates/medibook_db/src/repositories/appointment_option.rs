//! Repository for appointment option templates
//!
//! Templates define a treatment's price and the full set of offerable slot
//! labels. They are maintained externally; the backend reads them and only
//! writes through the startup seed.

use crate::error::DbError;
use async_trait::async_trait;

pub use medibook_common::models::AppointmentOption;

/// Repository for appointment option templates
#[async_trait]
pub trait AppointmentOptionRepository: Send + Sync {
    /// Initialize the schema for the templates collection if it is absent.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// Find all templates, in their natural store order.
    async fn find_all(&self) -> Result<Vec<AppointmentOption>, DbError>;

    /// Find a template by its treatment name.
    async fn find_by_name(&self, name: &str) -> Result<Option<AppointmentOption>, DbError>;

    /// Insert a template, returning it with its store id set.
    ///
    /// Fails with [`DbError::UniqueViolation`] if a template with the same
    /// name already exists.
    async fn insert(&self, option: AppointmentOption) -> Result<AppointmentOption, DbError>;
}
