// --- File: crates/medibook_auth/src/middleware.rs ---

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use medibook_config::AppConfig;
use std::sync::Arc;
use tracing::{error, warn};

use crate::token::verify_token;

// The state the identity middleware needs: the AppConfig holding the
// signing secret.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AppConfig>,
}

/// Axum middleware that gates a route behind a verified identity.
///
/// A missing `Authorization` header is a 401; a present but invalid or
/// expired bearer token is a 403. On success the decoded [`crate::token::Claims`]
/// are stored in the request extensions for handlers to read.
pub async fn require_identity(
    State(auth_state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let secret = match auth_state
        .config
        .auth
        .as_ref()
        .and_then(|auth| auth.access_token_secret.clone())
    {
        Some(secret) => secret,
        None => {
            error!("Token signing secret not configured; cannot verify identities");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error for identity verification.".to_string(),
            )
                .into_response();
        }
    };

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(auth_header) = auth_header else {
        return (StatusCode::UNAUTHORIZED, "Unauthorized Access".to_string()).into_response();
    };

    // A header with the wrong scheme carries a credential that cannot
    // verify, so it falls through to the 403 branch below.
    let token = auth_header.strip_prefix("Bearer ").unwrap_or("");

    match verify_token(token, &secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => {
            warn!("Rejected credential: {}", e);
            (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({ "message": "Forbidden Access" })),
            )
                .into_response()
        }
    }
}
