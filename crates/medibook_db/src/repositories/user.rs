//! Repository for user accounts
//!
//! Users self-register with a unique email. The only mutation the backend
//! ever performs is promoting a role to admin; accounts are never demoted or
//! deleted.

use crate::error::DbError;
use async_trait::async_trait;

pub use medibook_common::models::{Role, User};

/// Repository for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Initialize the schema for the users collection if it is absent.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// Find all users, in their natural store order.
    async fn find_all(&self) -> Result<Vec<User>, DbError>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError>;

    /// Find a user by store id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Insert a user, returning it with its store id set.
    ///
    /// Fails with [`DbError::UniqueViolation`] if the email is taken.
    async fn insert(&self, user: User) -> Result<User, DbError>;

    /// Set the admin role on the user with the given store id.
    ///
    /// Returns `false` if no such user exists. Deliberately not an upsert:
    /// promotion must target an existing account.
    async fn set_admin_role(&self, id: i64) -> Result<bool, DbError>;
}
