//! Employee API Handlers

use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::EmployeeWithRoles;

use crate::auth::{CurrentUser, Permission};
use crate::error::ServiceError;
use crate::services::employees;
use crate::state::AppState;

/// Employees with their roles, ordered by name
pub async fn list(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<EmployeeWithRoles>>> {
    caller.require(Permission::ManageEmployees)?;
    let list = employees::list_employees_with_roles(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(list))
}
