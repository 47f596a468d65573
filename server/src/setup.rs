use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tarefas_database::SqliteTaskRepository;
use tarefas_http::{ApiServer, StaticCredentials};
use tracing::info;

use crate::config::Config;

/// Create the task repository from the configuration
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTaskRepository>> {
    let database_url = config.database_url();
    info!("Using database URL: {}", database_url);

    ensure_database_directory(&database_url)?;

    let repo = SqliteTaskRepository::connect(&database_url, config.database.max_connections)
        .await
        .context("Failed to open task database")?;

    info!("Running database migrations");
    repo.migrate()
        .await
        .context("Failed to run database migrations")?;

    Ok(Arc::new(repo))
}

/// Create and configure the API server
pub fn create_server(
    config: &Config,
    repository: Arc<SqliteTaskRepository>,
) -> Result<ApiServer<SqliteTaskRepository>> {
    let credentials = Arc::new(StaticCredentials::new(
        config.auth.username.clone(),
        config.auth.password.clone(),
    ));

    let server = ApiServer::new(repository, credentials)
        .with_allowed_origin(&config.server.cors_allow_origin)
        .with_context(|| {
            format!(
                "Invalid CORS origin: {}",
                config.server.cors_allow_origin
            )
        })?;

    Ok(server)
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<ApiServer<SqliteTaskRepository>> {
    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    create_server(config, repository).context("Failed to create server")
}

/// Ensure the directory holding the database file exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                info!("Creating database directory: {}", parent.display());
                std::fs::create_dir_all(parent)
                    .context("Failed to create database directory")?;
            }
        }
    }
    Ok(())
}
