// File: services/medibook_backend/src/main.rs
use axum::{routing::get, Router};
use medibook_auth::routes as auth_routes;
use medibook_booking::routes as booking_routes;
use medibook_config::load_config;
use medibook_users::routes as users_routes;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod app_state;
mod seed;

use app_state::AppState;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    medibook_common::logging::init();

    // One store client for the whole process, shared by every handler
    let state = AppState::from_config(config.clone())
        .await
        .expect("Failed to connect to the store");
    state
        .init_schemas()
        .await
        .expect("Failed to initialize store schemas");

    if let Some(path) = config
        .database
        .as_ref()
        .and_then(|db| db.seed_templates_path.clone())
    {
        seed::seed_templates(&path, state.options_repo.as_ref())
            .await
            .expect("Failed to seed appointment option templates");
    }

    // The role gate cannot create the first admin; it is seeded here
    if let Ok(email) = env::var("MEDIBOOK_BOOTSTRAP_ADMIN") {
        seed::bootstrap_admin(&email, state.users_repo.as_ref())
            .await
            .expect("Failed to bootstrap admin user");
    }

    let api_router = Router::new().route("/", get(|| async { "MediBook server is running" }));

    let booking_router = booking_routes::routes(
        config.clone(),
        Arc::clone(&state.options_repo),
        Arc::clone(&state.bookings_repo),
    );
    let users_router = users_routes::routes(config.clone(), Arc::clone(&state.users_repo));
    let auth_router = auth_routes::routes(config.clone(), Arc::clone(&state.users_repo));

    #[allow(unused_mut)] // mutated only when the openapi feature is enabled
    let mut app = api_router
        .merge(booking_router)
        .merge(users_router)
        .merge(auth_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use medibook_auth::doc::AuthApiDoc;
        use medibook_booking::doc::BookingApiDoc;
        use medibook_users::doc::UsersApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the merged OpenAPI documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "MediBook API",
                version = "0.1.0",
                description = "MediBook appointment booking service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "MediBook", description = "Appointment booking endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        openapi_doc.merge(UsersApiDoc::openapi());
        openapi_doc.merge(AuthApiDoc::openapi());
        info!("Adding Swagger UI at /docs");

        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting MediBook server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
