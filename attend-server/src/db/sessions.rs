use sqlx::SqlitePool;

use crate::util::new_id;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    pub token: String,
    pub expires_at: i64,
    pub user_id: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    user_id: &str,
    token: &str,
    expires_at: i64,
    ip_address: Option<&str>,
    user_agent: Option<&str>,
    now: i64,
) -> Result<Session, sqlx::Error> {
    let id = new_id();
    sqlx::query(
        "INSERT INTO attendease_session (id, token, expires_at, user_id, ip_address, user_agent, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(token)
    .bind(expires_at)
    .bind(user_id)
    .bind(ip_address)
    .bind(user_agent)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Session {
        id,
        token: token.to_string(),
        expires_at,
        user_id: user_id.to_string(),
        ip_address: ip_address.map(str::to_string),
        user_agent: user_agent.map(str::to_string),
        created_at: now,
        updated_at: now,
    })
}

pub async fn find_by_token(pool: &SqlitePool, token: &str) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM attendease_session WHERE token = ?")
        .bind(token)
        .fetch_optional(pool)
        .await
}

/// Push the expiry out and stamp `updated_at`
pub async fn extend(
    pool: &SqlitePool,
    session_id: &str,
    expires_at: i64,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE attendease_session SET expires_at = ?, updated_at = ? WHERE id = ?")
        .bind(expires_at)
        .bind(now)
        .bind(session_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_by_token(pool: &SqlitePool, token: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendease_session WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_expired(pool: &SqlitePool, now: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendease_session WHERE expires_at <= ?")
        .bind(now)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
