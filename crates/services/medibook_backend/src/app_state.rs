// --- File: crates/services/medibook_backend/src/app_state.rs ---
use medibook_config::AppConfig;
use medibook_db::{
    AppointmentOptionRepository, BookingRepository, DbClient, DbError,
    SqlAppointmentOptionRepository, SqlBookingRepository, SqlUserRepository, UserRepository,
};
use std::sync::Arc;

/// Application state assembled once at process start.
///
/// Holds the single process-scoped store client and the repositories that
/// are injected into each feature router. Request handlers never open their
/// own connections; everything goes through these shared handles.
pub struct AppState {
    /// Kept for components that need configuration access beyond startup
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    /// The process-scoped pool; repositories hold clones of it
    #[allow(dead_code)]
    pub db_client: DbClient,
    pub options_repo: Arc<dyn AppointmentOptionRepository>,
    pub bookings_repo: Arc<dyn BookingRepository>,
    pub users_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Connects the store and wires the repositories over it.
    pub async fn from_config(config: Arc<AppConfig>) -> Result<Self, DbError> {
        let db_client = DbClient::new(&config).await?;

        let options_repo: Arc<dyn AppointmentOptionRepository> =
            Arc::new(SqlAppointmentOptionRepository::new(db_client.clone()));
        let bookings_repo: Arc<dyn BookingRepository> =
            Arc::new(SqlBookingRepository::new(db_client.clone()));
        let users_repo: Arc<dyn UserRepository> =
            Arc::new(SqlUserRepository::new(db_client.clone()));

        Ok(Self {
            config,
            db_client,
            options_repo,
            bookings_repo,
            users_repo,
        })
    }

    /// Idempotently creates the three collections.
    pub async fn init_schemas(&self) -> Result<(), DbError> {
        self.options_repo.init_schema().await?;
        self.bookings_repo.init_schema().await?;
        self.users_repo.init_schema().await?;
        Ok(())
    }
}
