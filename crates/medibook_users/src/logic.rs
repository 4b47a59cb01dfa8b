// --- File: crates/medibook_users/src/logic.rs ---
use medibook_db::{DbError, UserRepository};
use tracing::{debug, info};

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum RoleError {
    #[error("Actor is not an admin")]
    Forbidden,
    #[error("Target user not found")]
    TargetNotFound,
    #[error("Store error: {0}")]
    Store(#[from] DbError),
}

// --- Role Gate ---

/// Returns whether the user with this email holds the admin role.
///
/// An absent user is simply not an admin, not an error.
pub async fn is_admin(users: &dyn UserRepository, email: &str) -> Result<bool, DbError> {
    Ok(users
        .find_by_email(email)
        .await?
        .map(|user| user.is_admin())
        .unwrap_or(false))
}

/// Promotes the target user to admin.
///
/// The actor email must resolve to a stored user who is already an admin.
/// Promotion targets an existing account: a target id matching no user is
/// reported, never created. The very first admin therefore cannot be made
/// through this gate and must be seeded out-of-band.
pub async fn promote_to_admin(
    users: &dyn UserRepository,
    actor_email: &str,
    target_id: i64,
) -> Result<(), RoleError> {
    let actor_is_admin = is_admin(users, actor_email).await?;
    if !actor_is_admin {
        debug!("Refusing promotion: actor {} is not an admin", actor_email);
        return Err(RoleError::Forbidden);
    }

    if !users.set_admin_role(target_id).await? {
        return Err(RoleError::TargetNotFound);
    }

    info!("User {} promoted to admin by {}", target_id, actor_email);
    Ok(())
}
