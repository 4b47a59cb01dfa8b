//! SQL implementation of the user repository

use crate::error::DbError;
use crate::repositories::user::{Role, User, UserRepository};
use crate::DbClient;
use async_trait::async_trait;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db_client: DbClient,
}

impl SqlUserRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_user(row: &sqlx::any::AnyRow) -> User {
    let role: Option<String> = row.try_get("role").ok();
    User {
        id: row.try_get("id").ok(),
        email: row.try_get("email").unwrap_or_default(),
        name: row.try_get("name").unwrap_or_default(),
        role: Role::from_stored(role.as_deref()),
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing users schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                role TEXT
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Users schema initialized successfully");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, DbError> {
        debug!("Finding all users");

        let query = r#"
            SELECT id, email, name, role
            FROM users
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find users: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(row_to_user).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        debug!("Finding user by email: {}", email);

        let query = r#"
            SELECT id, email, name, role
            FROM users
            WHERE email = $1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user by email: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.as_ref().map(row_to_user))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        debug!("Finding user by id: {}", id);

        let query = r#"
            SELECT id, email, name, role
            FROM users
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user by id: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.as_ref().map(row_to_user))
    }

    async fn insert(&self, user: User) -> Result<User, DbError> {
        debug!("Inserting user: {}", user.email);

        let query = r#"
            INSERT INTO users (email, name, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, role
        "#;

        let row = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.role.as_stored())
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert user: {}", e);
                DbError::from_write(e, &user.email)
            })?;

        info!("User inserted successfully");
        Ok(row_to_user(&row))
    }

    async fn set_admin_role(&self, id: i64) -> Result<bool, DbError> {
        debug!("Promoting user {} to admin", id);

        let query = r#"
            UPDATE users
            SET role = 'admin'
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to promote user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
