use shared::models::User;
use sqlx::SqlitePool;

use crate::util::{millis_to_datetime, new_id};

/// Provider id of email+password accounts
pub const CREDENTIAL_PROVIDER: &str = "credential";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    email_verified: bool,
    image: Option<String>,
    employee_id: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            email_verified: row.email_verified,
            image: row.image,
            employee_id: row.employee_id,
            created_at: millis_to_datetime(row.created_at),
            updated_at: millis_to_datetime(row.updated_at),
        }
    }
}

/// Create a user with a credential account in one transaction
///
/// `employee_id` links the user at creation time.
pub async fn create_with_password(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    employee_id: Option<&str>,
    now: i64,
) -> Result<User, sqlx::Error> {
    let user_id = new_id();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO attendease_user (id, name, email, email_verified, employee_id, created_at, updated_at)
         VALUES (?, ?, ?, 0, ?, ?, ?)",
    )
    .bind(&user_id)
    .bind(name)
    .bind(email)
    .bind(employee_id)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO attendease_account (id, account_id, provider_id, user_id, password, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(new_id())
    .bind(&user_id)
    .bind(CREDENTIAL_PROVIDER)
    .bind(&user_id)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, &user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    let row: Option<UserRow> = sqlx::query_as("SELECT * FROM attendease_user WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(User::from))
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row: Option<UserRow> =
        sqlx::query_as("SELECT * FROM attendease_user WHERE email = ? COLLATE NOCASE")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(User::from))
}

/// Argon2 hash stored on the user's credential account
pub async fn password_hash(pool: &SqlitePool, user_id: &str) -> Result<Option<String>, sqlx::Error> {
    let hash: Option<Option<String>> = sqlx::query_scalar(
        "SELECT password FROM attendease_account WHERE user_id = ? AND provider_id = ?",
    )
    .bind(user_id)
    .bind(CREDENTIAL_PROVIDER)
    .fetch_optional(pool)
    .await?;
    Ok(hash.flatten())
}

pub async fn set_employee(
    pool: &SqlitePool,
    user_id: &str,
    employee_id: &str,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE attendease_user SET employee_id = ?, updated_at = ? WHERE id = ?")
            .bind(employee_id)
            .bind(now)
            .bind(user_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}
