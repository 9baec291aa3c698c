use crate::pool::DbError;
use sqlx::MySqlPool;
use tracing::debug;

/// Fixed value bound to `column2` of every inserted record.
pub const RECORD_TAG: &str = "Another Value";

/// Insert one record. `column1` must already be validated by the caller;
/// both values are bound as parameters, never interpolated into the
/// statement text.
pub async fn insert_record(pool: &MySqlPool, column1: &str) -> Result<u64, DbError> {
    let result = sqlx::query("INSERT INTO mytable (column1, column2) VALUES (?, ?)")
        .bind(column1)
        .bind(RECORD_TAG)
        .execute(pool)
        .await?;

    debug!("Inserted record: {}", column1);
    Ok(result.last_insert_id())
}
