use sqlx::SqlitePool;

/// Store one rating and return its id
pub async fn create(
    pool: &SqlitePool,
    event_id: i64,
    participant_id: &str,
    rating: i64,
    comments: Option<&str>,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO attendease_event_feedback
            (event_id, participant_id, rating, comments, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(event_id)
    .bind(participant_id)
    .bind(rating)
    .bind(comments)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn count(pool: &SqlitePool, event_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM attendease_event_feedback WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await
}

/// Mean rating, `None` when the event has no feedback
pub async fn average_rating(pool: &SqlitePool, event_id: i64) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar("SELECT AVG(rating) FROM attendease_event_feedback WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await
}
