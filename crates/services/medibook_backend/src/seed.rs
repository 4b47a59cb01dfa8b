// --- File: crates/services/medibook_backend/src/seed.rs ---
//! Startup seeding: appointment option templates from a JSON file, and the
//! out-of-band first admin.

use medibook_common::models::{AppointmentOption, Role, User};
use medibook_db::{AppointmentOptionRepository, DbError, UserRepository};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Deserialize, Debug)]
struct TemplateSeed {
    name: String,
    price: i64,
    slots: Vec<String>,
}

/// Inserts any template from the seed file that is not stored yet.
///
/// Existing templates are left untouched; the file is purely additive, so
/// running it on every start is safe.
pub async fn seed_templates(
    path: &str,
    options: &dyn AppointmentOptionRepository,
) -> Result<(), DbError> {
    if !Path::new(path).exists() {
        warn!("Template seed file {} does not exist, skipping", path);
        return Ok(());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| DbError::Other(format!("Failed to read seed file {}: {}", path, e)))?;
    let seeds: Vec<TemplateSeed> = serde_json::from_str(&raw)
        .map_err(|e| DbError::Other(format!("Failed to parse seed file {}: {}", path, e)))?;

    for seed in seeds {
        if options.find_by_name(&seed.name).await?.is_none() {
            info!("Seeding appointment option template: {}", seed.name);
            options
                .insert(AppointmentOption {
                    id: None,
                    name: seed.name,
                    price: seed.price,
                    slots: seed.slots,
                })
                .await?;
        }
    }

    Ok(())
}

/// Creates or promotes the bootstrap admin account.
///
/// The role gate cannot mint the first admin (no admin exists yet to
/// authorize it), so when `MEDIBOOK_BOOTSTRAP_ADMIN` names an email the
/// account is written directly against the store at startup.
pub async fn bootstrap_admin(email: &str, users: &dyn UserRepository) -> Result<(), DbError> {
    match users.find_by_email(email).await? {
        Some(user) if user.is_admin() => {}
        Some(user) => {
            if let Some(id) = user.id {
                users.set_admin_role(id).await?;
                info!("Bootstrap admin {} promoted", email);
            }
        }
        None => {
            users
                .insert(User {
                    id: None,
                    email: email.to_string(),
                    name: email.to_string(),
                    role: Role::Admin,
                })
                .await?;
            info!("Bootstrap admin {} created", email);
        }
    }

    Ok(())
}
