//! SQL implementation of the appointment option repository

use crate::error::DbError;
use crate::repositories::appointment_option::{AppointmentOption, AppointmentOptionRepository};
use crate::DbClient;
use async_trait::async_trait;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the appointment option repository
#[derive(Debug, Clone)]
pub struct SqlAppointmentOptionRepository {
    db_client: DbClient,
}

impl SqlAppointmentOptionRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_option(row: &sqlx::any::AnyRow) -> AppointmentOption {
    let slots_json: String = row.try_get("slots").unwrap_or_default();
    AppointmentOption {
        id: row.try_get("id").ok(),
        name: row.try_get("name").unwrap_or_default(),
        price: row.try_get("price").unwrap_or_default(),
        slots: serde_json::from_str(&slots_json).unwrap_or_default(),
    }
}

#[async_trait]
impl AppointmentOptionRepository for SqlAppointmentOptionRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing appointment options schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS appointment_options (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                price INTEGER NOT NULL,
                slots TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Appointment options schema initialized successfully");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<AppointmentOption>, DbError> {
        debug!("Finding all appointment options");

        let query = r#"
            SELECT id, name, price, slots
            FROM appointment_options
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find appointment options: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(row_to_option).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AppointmentOption>, DbError> {
        debug!("Finding appointment option by name: {}", name);

        let query = r#"
            SELECT id, name, price, slots
            FROM appointment_options
            WHERE name = $1
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find appointment option: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.as_ref().map(row_to_option))
    }

    async fn insert(&self, option: AppointmentOption) -> Result<AppointmentOption, DbError> {
        debug!("Inserting appointment option: {}", option.name);

        let slots_json = serde_json::to_string(&option.slots)
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        let query = r#"
            INSERT INTO appointment_options (name, price, slots)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, slots
        "#;

        let row = sqlx::query(query)
            .bind(&option.name)
            .bind(option.price)
            .bind(&slots_json)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert appointment option: {}", e);
                DbError::from_write(e, &option.name)
            })?;

        info!("Appointment option inserted successfully");
        Ok(row_to_option(&row))
    }
}
