// File: crates/medibook_users/src/handlers.rs
use crate::logic::{is_admin, promote_to_admin, RoleError};
use crate::models::{AdminCheckResponse, PromoteResponse, RegisterResponse, RegisterUserRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use medibook_auth::Claims;
use medibook_common::models::{Role, User};
use medibook_config::AppConfig;
use medibook_db::UserRepository;
use std::sync::Arc;
use tracing::info;

// Define shared state needed by the user handlers
#[derive(Clone)]
pub struct UsersState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
}

/// Handler to list all users.
///
/// Runs behind the identity middleware, and the verified identity must hold
/// the admin role.
#[axum::debug_handler]
pub async fn list_users_handler(
    State(state): State<Arc<UsersState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let actor_is_admin = is_admin(state.users.as_ref(), &claims.email)
        .await
        .map_err(|e| {
            info!("Error checking admin role: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to check admin role".to_string(),
            )
        })?;
    if !actor_is_admin {
        return Err((StatusCode::FORBIDDEN, "Forbidden Access".to_string()));
    }

    match state.users.find_all().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            info!("Error listing users: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to list users".to_string(),
            ))
        }
    }
}

/// Handler for self-registration.
///
/// Registration stays credential-free because it precedes token issuance;
/// a taken email is a soft conflict in the body.
#[axum::debug_handler]
pub async fn register_user_handler(
    State(state): State<Arc<UsersState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<RegisterResponse>, (StatusCode, String)> {
    if payload.email.trim().is_empty() || payload.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "email and name must not be empty".to_string(),
        ));
    }

    let user = User {
        id: None,
        email: payload.email,
        name: payload.name,
        role: Role::None,
    };

    match state.users.insert(user).await {
        Ok(stored) => Ok(Json(RegisterResponse {
            success: true,
            user_id: stored.id,
            message: "User registered successfully.".to_string(),
        })),
        Err(e) if e.is_unique_violation() => Ok(Json(RegisterResponse {
            success: false,
            user_id: None,
            message: "An account with that email already exists.".to_string(),
        })),
        Err(e) => {
            info!("Error registering user: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to register user".to_string(),
            ))
        }
    }
}

/// Handler to check whether an email holds the admin role.
#[axum::debug_handler]
pub async fn is_admin_handler(
    State(state): State<Arc<UsersState>>,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, (StatusCode, String)> {
    match is_admin(state.users.as_ref(), &email).await {
        Ok(admin) => Ok(Json(AdminCheckResponse { is_admin: admin })),
        Err(e) => {
            info!("Error checking admin role: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to check admin role".to_string(),
            ))
        }
    }
}

/// Handler to promote a user to admin by store id.
///
/// Runs behind the identity middleware; the verified identity must already
/// be an admin, and the target must exist.
#[axum::debug_handler]
pub async fn promote_admin_handler(
    State(state): State<Arc<UsersState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<Json<PromoteResponse>, (StatusCode, String)> {
    match promote_to_admin(state.users.as_ref(), &claims.email, id).await {
        Ok(()) => Ok(Json(PromoteResponse {
            success: true,
            message: "User promoted to admin.".to_string(),
        })),
        Err(RoleError::Forbidden) => {
            Err((StatusCode::FORBIDDEN, "Forbidden Access".to_string()))
        }
        Err(RoleError::TargetNotFound) => {
            Err((StatusCode::NOT_FOUND, "User not found.".to_string()))
        }
        Err(RoleError::Store(e)) => {
            info!("Error promoting user: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to promote user".to_string(),
            ))
        }
    }
}
