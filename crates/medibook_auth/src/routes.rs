// --- File: crates/medibook_auth/src/routes.rs ---

use crate::handlers::{issue_token_handler, AuthApiState};
use axum::{routing::get, Router};
use medibook_config::AppConfig;
use medibook_db::UserRepository;
use std::sync::Arc;

/// Creates a router containing the token issuance route.
pub fn routes(config: Arc<AppConfig>, users: Arc<dyn UserRepository>) -> Router {
    let state = Arc::new(AuthApiState { config, users });

    Router::new()
        .route("/jwt", get(issue_token_handler))
        .with_state(state)
}
