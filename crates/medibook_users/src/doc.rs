// File: crates/medibook_users/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::models::{AdminCheckResponse, PromoteResponse, RegisterResponse, RegisterUserRequest};
use medibook_common::models::User;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users", body = Vec<User>),
        (status = 401, description = "No credential presented"),
        (status = 403, description = "Credential invalid or actor is not an admin"),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_list_users_handler() {}

#[utoipa::path(
    post,
    path = "/users",
    request_body(content = RegisterUserRequest, example = json!({
        "email": "a@x.com",
        "name": "Ada Lovelace"
    })),
    responses(
        (status = 200, description = "Registration outcome; a taken email is a soft conflict", body = RegisterResponse),
        (status = 400, description = "Request failed schema validation"),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_register_user_handler() {}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Email to check", example = "a@x.com")
    ),
    responses(
        (status = 200, description = "Whether the email holds the admin role", body = AdminCheckResponse)
    )
)]
fn doc_is_admin_handler() {}

#[utoipa::path(
    put,
    path = "/users/admin/{id}",
    params(
        ("id" = i64, Path, description = "Store id of the user to promote")
    ),
    responses(
        (status = 200, description = "Promotion result", body = PromoteResponse),
        (status = 401, description = "No credential presented"),
        (status = 403, description = "Credential invalid or actor is not an admin"),
        (status = 404, description = "Target user does not exist"),
        (status = 503, description = "Store unavailable")
    )
)]
fn doc_promote_admin_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_users_handler,
        doc_register_user_handler,
        doc_is_admin_handler,
        doc_promote_admin_handler
    ),
    components(
        schemas(
            RegisterUserRequest,
            RegisterResponse,
            AdminCheckResponse,
            PromoteResponse,
            User
        )
    ),
    tags(
        (name = "users", description = "User accounts and admin role API")
    )
)]
pub struct UsersApiDoc;
