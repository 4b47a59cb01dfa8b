// --- File: crates/medibook_auth/src/handlers.rs ---

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use medibook_config::AppConfig;
use medibook_db::UserRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::token::issue_token;

// Shared state for the auth routes
#[derive(Clone)]
pub struct AuthApiState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct TokenRequestQuery {
    pub email: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Handler to issue a session token.
///
/// A token is only issued for a registered email; anyone else gets a 403
/// with an empty token, so this endpoint never confirms more than account
/// existence.
#[axum::debug_handler]
pub async fn issue_token_handler(
    State(state): State<Arc<AuthApiState>>,
    Query(query): Query<TokenRequestQuery>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<TokenResponse>)> {
    let empty = || {
        Json(TokenResponse {
            access_token: String::new(),
        })
    };

    let auth_config = state.config.auth.clone().unwrap_or_default();
    let Some(secret) = auth_config.access_token_secret else {
        info!("Token signing secret missing in AppConfig.");
        return Err((StatusCode::INTERNAL_SERVER_ERROR, empty()));
    };

    let user = match state.users.find_by_email(&query.email).await {
        Ok(user) => user,
        Err(e) => {
            info!("Error looking up user for token issuance: {}", e);
            return Err((StatusCode::SERVICE_UNAVAILABLE, empty()));
        }
    };

    if user.is_none() {
        return Err((StatusCode::FORBIDDEN, empty()));
    }

    match issue_token(&query.email, &secret, auth_config.token_expiry_secs) {
        Ok(token) => Ok(Json(TokenResponse {
            access_token: token,
        })),
        Err(e) => {
            info!("Error issuing token: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, empty()))
        }
    }
}
