use shared::models::ParticipantType;
use sqlx::SqlitePool;

/// Record one check-in and return its id
pub async fn create(
    pool: &SqlitePool,
    event_id: i64,
    participant_id: &str,
    participant_type: ParticipantType,
    created_by: &str,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO attendease_event_attendance
            (event_id, participant_id, participant_type, created_by, creation_date)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(event_id)
    .bind(participant_id)
    .bind(participant_type.as_str())
    .bind(created_by)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn count(pool: &SqlitePool, event_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM attendease_event_attendance WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await
}
