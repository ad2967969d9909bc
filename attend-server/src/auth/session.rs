//! Database-backed sessions
//!
//! A session is a random 32-character token with a fixed lifetime. Using a
//! session whose last refresh is older than the update age pushes its expiry
//! out by a full lifetime.

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};
use shared::models::User;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::db::sessions::Session;
use crate::util::random_token;

pub const SESSION_COOKIE: &str = "attendease.session_token";
pub const TOKEN_LEN: usize = 32;

const HOUR_MS: i64 = 3_600_000;

/// Value of a named cookie in the `Cookie` header(s)
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Session token from the session cookie, else from `Authorization: Bearer`
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    cookie_value(headers, SESSION_COOKIE).or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    })
}

/// `Set-Cookie` value carrying a session token
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Open a new session for a user
pub async fn start(
    pool: &SqlitePool,
    config: &Config,
    user_id: &str,
    ip_address: Option<&str>,
    user_agent: Option<&str>,
    now: i64,
) -> Result<Session, sqlx::Error> {
    let token = random_token(TOKEN_LEN);
    let expires_at = now + config.session_ttl_hours * HOUR_MS;
    db::sessions::create(pool, user_id, &token, expires_at, ip_address, user_agent, now).await
}

/// Resolve a token to its live session and user
///
/// Expired sessions are deleted and resolve to `None`. Sessions last
/// refreshed longer ago than the update age are extended.
pub async fn resolve(
    pool: &SqlitePool,
    config: &Config,
    token: &str,
    now: i64,
) -> Result<Option<(Session, User)>, sqlx::Error> {
    let Some(mut session) = db::sessions::find_by_token(pool, token).await? else {
        return Ok(None);
    };

    if session.expires_at <= now {
        db::sessions::delete_by_token(pool, token).await?;
        return Ok(None);
    }

    if now - session.updated_at >= config.session_update_age_hours * HOUR_MS {
        let expires_at = now + config.session_ttl_hours * HOUR_MS;
        db::sessions::extend(pool, &session.id, expires_at, now).await?;
        session.expires_at = expires_at;
        session.updated_at = now;
    }

    let Some(user) = db::users::find_by_id(pool, &session.user_id).await? else {
        return Ok(None);
    };
    Ok(Some((session, user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_token_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; attendease.session_token=abc123; other=1"),
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer zzz"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_token_from_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("tok"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_empty_cookie_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("attendease.session_token="));
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("t0k", 604_800, true);
        assert!(cookie.starts_with("attendease.session_token=t0k;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.ends_with("; Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }
}
