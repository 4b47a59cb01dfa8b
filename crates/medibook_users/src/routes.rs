// --- File: crates/medibook_users/src/routes.rs ---

use crate::handlers::{
    is_admin_handler, list_users_handler, promote_admin_handler, register_user_handler, UsersState,
};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use medibook_auth::{require_identity, AuthState};
use medibook_config::AppConfig;
use medibook_db::UserRepository;
use std::sync::Arc;

/// Creates a router containing all routes for the users feature.
///
/// Listing and promotion run behind the identity middleware; registration
/// and the admin check are open. The `/users/admin/{key}` segment carries an
/// email for GET and a store id for PUT; axum requires one parameter name
/// for the shared position.
pub fn routes(config: Arc<AppConfig>, users: Arc<dyn UserRepository>) -> Router {
    let auth_state = Arc::new(AuthState {
        config: config.clone(),
    });
    let users_state = Arc::new(UsersState { config, users });

    let protected = Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/admin/{key}", put(promote_admin_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_identity));

    Router::new()
        .route("/users", post(register_user_handler))
        .route("/users/admin/{key}", get(is_admin_handler))
        .merge(protected)
        .with_state(users_state)
}
