//! Session extractors
//!
//! `CurrentUser` is resolved once per request and cached in the request
//! extensions; the other extractors build on it.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use shared::error::AppError;
use shared::models::{Employee, RoleName, UserEmployee};

use super::permissions::Permission;
use super::session::{self, token_from_headers};
use crate::db::sessions::Session;
use crate::error::ServiceError;
use crate::security_log;
use crate::services::employees::get_user_employee;
use crate::state::AppState;
use crate::util::now_millis;

/// Signed-in caller with its employee link and roles
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session: Session,
    pub profile: UserEmployee,
    /// Effective role: the highest role held, `None` without an employee
    pub role: Option<RoleName>,
}

impl CurrentUser {
    pub fn user_id(&self) -> &str {
        &self.profile.user.id
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.profile.employee.as_ref()
    }

    /// 403 unless the caller's role passes `permission`
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        permission.check(self.role).inspect_err(|_| {
            security_log!(
                WARN,
                "permission_denied",
                user_id = %self.user_id(),
                role = ?self.role,
                required = permission.as_str()
            );
        })
    }

    async fn resolve(parts: &mut Parts, state: &AppState) -> Result<Option<Self>, ServiceError> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(Some(user.clone()));
        }

        let Some(token) = token_from_headers(&parts.headers) else {
            return Ok(None);
        };

        let Some((session, user)) =
            session::resolve(&state.pool, &state.config, &token, now_millis()).await?
        else {
            security_log!(WARN, "session_invalid", uri = %parts.uri);
            return Ok(None);
        };

        let Some(profile) = get_user_employee(&state.pool, &user.id).await? else {
            return Ok(None);
        };
        let role = profile.highest_role();
        let current = CurrentUser {
            session,
            profile,
            role,
        };
        parts.extensions.insert(current.clone());
        Ok(Some(current))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        CurrentUser::resolve(parts, state)
            .await?
            .ok_or_else(AppError::not_authenticated)
    }
}

impl OptionalFromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(CurrentUser::resolve(parts, state).await?)
    }
}

/// Caller if signed in, `None` otherwise (never rejects for a missing session)
pub type MaybeUser = Option<CurrentUser>;

/// Signed-in caller that is linked to an employee record
///
/// A missing session and a missing link both reject with
/// `EmployeeNotLinked` (400).
#[derive(Debug, Clone)]
pub struct CurrentEmployee {
    pub user: CurrentUser,
    pub employee: Employee,
}

impl CurrentEmployee {
    pub fn employee_id(&self) -> &str {
        &self.employee.employee_id
    }

    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        self.user.require(permission)
    }
}

impl FromRequestParts<AppState> for CurrentEmployee {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::resolve(parts, state).await?;
        match user {
            Some(user) => match user.profile.employee.clone() {
                Some(employee) => Ok(CurrentEmployee { user, employee }),
                None => Err(AppError::employee_not_linked()),
            },
            None => Err(AppError::employee_not_linked()),
        }
    }
}
