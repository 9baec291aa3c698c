use fd_core::config::DbConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

/// Connect to the database described by the given configuration.
///
/// The configuration is passed in explicitly at call time; nothing is read
/// from process-global state. A missing password is forwarded as-is and
/// surfaces as an authentication failure from the server. On a failed
/// connection no handle exists, so there is nothing to release; on every
/// other path the pool releases its connections when dropped.
pub async fn connect(config: &DbConfig) -> Result<MySqlPool, DbError> {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .username(&config.user)
        .database(&config.database);
    if let Some(password) = config.password.as_deref() {
        options = options.password(password);
    }

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_with(options)
        .await?;

    info!(host = %config.host, database = %config.database, "Connected to database");
    Ok(pool)
}
