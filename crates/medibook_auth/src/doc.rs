// File: crates/medibook_auth/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::TokenResponse;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/jwt",
    params(
        ("email" = String, Query, description = "Email of a registered user", example = "a@x.com")
    ),
    responses(
        (status = 200, description = "Signed session token", body = TokenResponse),
        (status = 403, description = "No account for that email",
         example = json!({ "accessToken": "" })
        ),
        (status = 503, description = "Store unavailable")
    ),
)]
fn doc_issue_token_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_issue_token_handler),
    components(schemas(TokenResponse)),
    tags(
        (name = "auth", description = "Session token API")
    )
)]
pub struct AuthApiDoc;
