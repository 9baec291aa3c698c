//! Validated persistence of the fetched payload.
//!
//! The guard runs before any database work: a missing payload, a non-string
//! JSON value, or text outside the allowlist is rejected without opening a
//! connection.

use fd_core::config::DbConfig;
use fd_core::security::input;
use fd_db::pool::{self, DbError};
use fd_db::queries;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Invalid data provided. Only alphanumeric characters and spaces allowed.")]
    InvalidPayload,
    #[error("{0}")]
    Database(#[from] DbError),
}

/// Extract the insertable text from a fetch outcome.
///
/// Accepts only a present JSON string whose contents pass the record-text
/// allowlist. Everything else (absent payload, objects, arrays, numbers,
/// strings with punctuation) is [`PersistError::InvalidPayload`].
pub fn record_text(payload: Option<&Value>) -> Result<&str, PersistError> {
    let text = payload
        .and_then(Value::as_str)
        .ok_or(PersistError::InvalidPayload)?;
    input::validate_record_text(text).map_err(|_| PersistError::InvalidPayload)
}

/// Validate the payload, connect with the given configuration, and insert
/// one record. Each call opens and releases its own connection; two calls
/// with the same payload produce two rows.
pub async fn save_record(config: &DbConfig, payload: Option<&Value>) -> Result<(), PersistError> {
    let text = record_text(payload)?;

    let pool = pool::connect(config).await?;
    queries::insert_record(&pool, text).await?;

    info!("Saved record");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
