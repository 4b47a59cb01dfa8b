//! SQL implementation of the booking repository

use crate::error::DbError;
use crate::repositories::booking::{Booking, BookingRepository};
use crate::DbClient;
use async_trait::async_trait;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the booking repository
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_booking(row: &sqlx::any::AnyRow) -> Booking {
    Booking {
        id: row.try_get("id").ok(),
        appointment_date: row.try_get("appointment_date").unwrap_or_default(),
        treatment: row.try_get("treatment").unwrap_or_default(),
        slot: row.try_get("slot").unwrap_or_default(),
        email: row.try_get("email").unwrap_or_default(),
        patient_name: row.try_get("patient_name").unwrap_or_default(),
    }
}

#[async_trait]
impl BookingRepository for SqlBookingRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing bookings schema");

        // The UNIQUE constraint on the triple is what makes concurrent
        // check-then-insert admission safe.
        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                appointment_date TEXT NOT NULL,
                treatment TEXT NOT NULL,
                slot TEXT NOT NULL,
                email TEXT NOT NULL,
                patient_name TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(appointment_date, treatment, email)
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Bookings schema initialized successfully");
        Ok(())
    }

    async fn find_by_date(&self, appointment_date: &str) -> Result<Vec<Booking>, DbError> {
        debug!("Finding bookings for date: {}", appointment_date);

        let query = r#"
            SELECT id, appointment_date, treatment, slot, email, patient_name
            FROM bookings
            WHERE appointment_date = $1
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(appointment_date)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find bookings by date: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(row_to_booking).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, DbError> {
        debug!("Finding bookings for email: {}", email);

        let query = r#"
            SELECT id, appointment_date, treatment, slot, email, patient_name
            FROM bookings
            WHERE email = $1
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find bookings by email: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(row_to_booking).collect())
    }

    async fn find_conflicts(
        &self,
        appointment_date: &str,
        treatment: &str,
        email: &str,
    ) -> Result<Vec<Booking>, DbError> {
        debug!(
            "Finding conflicting bookings for ({}, {}, {})",
            appointment_date, treatment, email
        );

        let query = r#"
            SELECT id, appointment_date, treatment, slot, email, patient_name
            FROM bookings
            WHERE appointment_date = $1 AND treatment = $2 AND email = $3
        "#;

        let rows = sqlx::query(query)
            .bind(appointment_date)
            .bind(treatment)
            .bind(email)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find conflicting bookings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(row_to_booking).collect())
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DbError> {
        debug!(
            "Inserting booking for {} on {} ({})",
            booking.email, booking.appointment_date, booking.treatment
        );

        let query = r#"
            INSERT INTO bookings (appointment_date, treatment, slot, email, patient_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, appointment_date, treatment, slot, email, patient_name
        "#;

        let context = format!(
            "booking ({}, {}, {})",
            booking.appointment_date, booking.treatment, booking.email
        );

        let row = sqlx::query(query)
            .bind(&booking.appointment_date)
            .bind(&booking.treatment)
            .bind(&booking.slot)
            .bind(&booking.email)
            .bind(&booking.patient_name)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::from_write(e, &context)
            })?;

        info!("Booking inserted successfully");
        Ok(row_to_booking(&row))
    }
}
