//! In-memory implementations of the repositories
//!
//! Used by tests and local development. The booking store enforces the same
//! uniqueness rule as the SQL schema: insert checks the
//! (appointment_date, treatment, email) triple and rejects under a single
//! lock, so concurrent admission behaves like the real unique index.

use crate::error::DbError;
use crate::repositories::appointment_option::{AppointmentOption, AppointmentOptionRepository};
use crate::repositories::booking::{Booking, BookingRepository};
use crate::repositories::user::{Role, User, UserRepository};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory appointment option repository
#[derive(Debug, Default)]
pub struct MemoryAppointmentOptionRepository {
    options: Mutex<Vec<AppointmentOption>>,
}

impl MemoryAppointmentOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentOptionRepository for MemoryAppointmentOptionRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<AppointmentOption>, DbError> {
        Ok(self.options.lock().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AppointmentOption>, DbError> {
        Ok(self
            .options
            .lock()
            .await
            .iter()
            .find(|option| option.name == name)
            .cloned())
    }

    async fn insert(&self, mut option: AppointmentOption) -> Result<AppointmentOption, DbError> {
        let mut options = self.options.lock().await;
        if options.iter().any(|existing| existing.name == option.name) {
            return Err(DbError::UniqueViolation(option.name));
        }
        option.id = Some(options.len() as i64 + 1);
        options.push(option.clone());
        Ok(option)
    }
}

/// In-memory booking repository
#[derive(Debug, Default)]
pub struct MemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_by_date(&self, appointment_date: &str) -> Result<Vec<Booking>, DbError> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|booking| booking.appointment_date == appointment_date)
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, DbError> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|booking| booking.email == email)
            .cloned()
            .collect())
    }

    async fn find_conflicts(
        &self,
        appointment_date: &str,
        treatment: &str,
        email: &str,
    ) -> Result<Vec<Booking>, DbError> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|booking| {
                booking.appointment_date == appointment_date
                    && booking.treatment == treatment
                    && booking.email == email
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, mut booking: Booking) -> Result<Booking, DbError> {
        // Check and insert under one lock, like the SQL unique index
        let mut bookings = self.bookings.lock().await;
        if bookings.iter().any(|existing| {
            existing.appointment_date == booking.appointment_date
                && existing.treatment == booking.treatment
                && existing.email == booking.email
        }) {
            return Err(DbError::UniqueViolation(format!(
                "booking ({}, {}, {})",
                booking.appointment_date, booking.treatment, booking.email
            )));
        }
        booking.id = Some(bookings.len() as i64 + 1);
        bookings.push(booking.clone());
        Ok(booking)
    }
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, DbError> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.id == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, DbError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(DbError::UniqueViolation(user.email));
        }
        user.id = Some(users.len() as i64 + 1);
        users.push(user.clone());
        Ok(user)
    }

    async fn set_admin_role(&self, id: i64) -> Result<bool, DbError> {
        let mut users = self.users.lock().await;
        match users.iter_mut().find(|user| user.id == Some(id)) {
            Some(user) => {
                user.role = Role::Admin;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(date: &str, treatment: &str, email: &str, slot: &str) -> Booking {
        Booking {
            id: None,
            appointment_date: date.to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            email: email.to_string(),
            patient_name: "Test Patient".to_string(),
        }
    }

    #[tokio::test]
    async fn booking_insert_rejects_duplicate_triple() {
        let repo = MemoryBookingRepository::new();
        repo.insert(booking("2024-01-10", "Braces", "a@x.com", "10am"))
            .await
            .unwrap();

        let err = repo
            .insert(booking("2024-01-10", "Braces", "a@x.com", "11am"))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());

        // A different patient or treatment is not a conflict
        repo.insert(booking("2024-01-10", "Braces", "b@x.com", "10am"))
            .await
            .unwrap();
        repo.insert(booking("2024-01-10", "Whitening", "a@x.com", "10am"))
            .await
            .unwrap();
        assert_eq!(repo.find_by_date("2024-01-10").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn find_conflicts_matches_only_the_triple() {
        let repo = MemoryBookingRepository::new();
        repo.insert(booking("2024-01-10", "Braces", "a@x.com", "10am"))
            .await
            .unwrap();

        let conflicts = repo
            .find_conflicts("2024-01-10", "Braces", "a@x.com")
            .await
            .unwrap();
        assert_eq!(conflicts.len(), 1);

        assert!(repo
            .find_conflicts("2024-01-11", "Braces", "a@x.com")
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .find_conflicts("2024-01-10", "Braces", "b@x.com")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn user_promotion_requires_an_existing_account() {
        let repo = MemoryUserRepository::new();
        let user = repo
            .insert(User {
                id: None,
                email: "a@x.com".to_string(),
                name: "Ada".to_string(),
                role: Role::None,
            })
            .await
            .unwrap();

        assert!(!repo.set_admin_role(999).await.unwrap());
        assert!(repo.set_admin_role(user.id.unwrap()).await.unwrap());
        let promoted = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(promoted.is_admin());
    }
}
