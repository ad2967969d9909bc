//! Auth API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{SessionView, SignIn, SignUp, User, UserSummary};

use crate::api::json_body;
use crate::auth::{CurrentUser, MaybeUser};
use crate::auth::session::{self, clear_session_cookie, session_cookie};
use crate::db;
use crate::db::sessions::Session;
use crate::error::ServiceError;
use crate::security_log;
use crate::services::employees::get_employee_by_email;
use crate::state::AppState;
use crate::util::{
    hash_password, millis_to_datetime, now_millis, verify_against_dummy, verify_password,
};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

fn client_meta(headers: &HeaderMap) -> (Option<String>, Option<String>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let ip = header("x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty());
    (ip, header("user-agent"))
}

/// Open a session and answer with the token, the user and the cookie
async fn open_session(state: &AppState, headers: &HeaderMap, user: &User) -> AppResult<Response> {
    let (ip, user_agent) = client_meta(headers);
    let session = session::start(
        &state.pool,
        &state.config,
        &user.id,
        ip.as_deref(),
        user_agent.as_deref(),
        now_millis(),
    )
    .await
    .map_err(ServiceError::from)?;

    session_response(state, &session, user)
}

fn session_response(state: &AppState, session: &Session, user: &User) -> AppResult<Response> {
    let max_age = state.config.session_ttl_hours * 3600;
    let cookie = HeaderValue::from_str(&session_cookie(
        &session.token,
        max_age,
        state.config.cookie_secure,
    ))
    .map_err(|e| AppError::internal(e.to_string()))?;

    let body = AuthResponse {
        token: session.token.clone(),
        user: UserSummary::from(user),
    };
    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}

/// Create a user with an email+password account
///
/// The user is linked to the employee with the same email when one exists.
pub async fn sign_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SignUp>, JsonRejection>,
) -> AppResult<Response> {
    let payload = json_body(body)?;
    let name = payload.name.trim();
    let email = payload.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AppError::validation("Name is required").with_detail("field", "name"));
    }
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email").with_detail("field", "email"));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort)
            .with_detail("minLength", MIN_PASSWORD_LEN));
    }

    let pool = &state.pool;
    if db::users::find_by_email(pool, &email)
        .await
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let employee = get_employee_by_email(pool, &email)
        .await
        .map_err(ServiceError::from)?;
    let password_hash =
        hash_password(&payload.password).map_err(|e| AppError::internal(e.to_string()))?;

    let user = db::users::create_with_password(
        pool,
        name,
        &email,
        &password_hash,
        employee.as_ref().map(|e| e.employee_id.as_str()),
        now_millis(),
    )
    .await
    .map_err(ServiceError::from)?;

    tracing::info!(
        user_id = %user.id,
        employee_id = ?user.employee_id,
        "User signed up"
    );
    open_session(&state, &headers, &user).await
}

pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SignIn>, JsonRejection>,
) -> AppResult<Response> {
    let payload = json_body(body)?;
    let email = payload.email.trim().to_lowercase();
    let pool = &state.pool;

    let user = db::users::find_by_email(pool, &email)
        .await
        .map_err(ServiceError::from)?;
    let Some(user) = user else {
        verify_against_dummy(&payload.password);
        security_log!(WARN, "sign_in_failed", email = %email, reason = "unknown_email");
        return Err(AppError::invalid_credentials());
    };

    let hash = db::users::password_hash(pool, &user.id)
        .await
        .map_err(ServiceError::from)?;
    let valid = match hash {
        Some(h) => verify_password(&payload.password, &h),
        None => verify_against_dummy(&payload.password),
    };
    if !valid {
        security_log!(WARN, "sign_in_failed", user_id = %user.id, reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    security_log!(INFO, "sign_in", user_id = %user.id);
    open_session(&state, &headers, &user).await
}

pub async fn sign_out(State(state): State<AppState>, caller: CurrentUser) -> AppResult<Response> {
    db::sessions::delete_by_token(&state.pool, &caller.session.token)
        .await
        .map_err(ServiceError::from)?;

    let cookie = HeaderValue::from_str(&clear_session_cookie(state.config.cookie_secure))
        .map_err(|e| AppError::internal(e.to_string()))?;
    security_log!(INFO, "sign_out", user_id = %caller.user_id());
    Ok((
        [(SET_COOKIE, cookie)],
        Json(serde_json::json!({ "success": true })),
    )
        .into_response())
}

/// Current session and user, or `null`
pub async fn get_session(caller: MaybeUser) -> Json<Option<SessionView>> {
    Json(caller.map(|c| SessionView {
        session_id: c.session.id,
        expires_at: millis_to_datetime(c.session.expires_at),
        user: c.profile.user,
    }))
}
