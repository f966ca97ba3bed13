//! Shared server state

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::utils::AppError;

/// State shared across all request handlers
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Prepare the work directory, open the database, run migrations
    /// and seed the initial data.
    pub async fn initialize(config: Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("tienda.db");
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        seed::seed_admin_user(&db.pool, &config.admin_password).await?;
        seed::seed_carousel_slides(&db.pool).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: Arc::new(config),
            pool: db.pool,
            jwt_service,
        })
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.config.uploads_dir()
    }
}
