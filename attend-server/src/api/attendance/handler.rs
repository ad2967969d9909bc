//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::AttendanceCreate;

use crate::api::json_body;
use crate::auth::{CurrentEmployee, Permission};
use crate::services::participation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub success: bool,
    pub attendance_id: i64,
}

/// Check a participant in to the event addressed by `code`
pub async fn record(
    State(state): State<AppState>,
    caller: CurrentEmployee,
    Path(code): Path<String>,
    body: Result<Json<AttendanceCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RecordResponse>)> {
    caller.require(Permission::RecordAttendance)?;
    let payload = json_body(body)?;
    let attendance_id =
        participation::record_attendance(&state.pool, &code, &payload, caller.employee_id())
            .await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            success: true,
            attendance_id,
        }),
    ))
}
