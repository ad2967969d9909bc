//! Event API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{EventCreate, EventStats, EventStatusUpdate, EventWithCreator};

use crate::api::json_body;
use crate::auth::{CurrentEmployee, CurrentUser, Permission};
use crate::services::events as service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BucketQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub success: bool,
    pub event_id: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub status: shared::models::EventStatus,
}

/// `GET /api/events?type=upcoming|inprogress|past`
///
/// Without `type` (or with an empty one) all three buckets are returned
/// together.
pub async fn list_buckets(
    State(state): State<AppState>,
    Query(query): Query<BucketQuery>,
) -> AppResult<Response> {
    let now = Utc::now();
    let tz = state.config.timezone;
    let pool = &state.pool;

    let kind = query.kind.as_deref().map(str::trim).filter(|k| !k.is_empty());
    let response = match kind {
        None => Json(service::all_buckets(pool, now, tz).await).into_response(),
        Some("upcoming") => Json(service::upcoming_events(pool, now).await).into_response(),
        Some("inprogress") => {
            Json(service::in_progress_events(pool, now, tz).await).into_response()
        }
        Some("past") => Json(service::past_events(pool, now, tz).await).into_response(),
        Some(other) => {
            return Err(AppError::invalid_request("Invalid event type filter")
                .with_detail("type", other));
        }
    };
    Ok(response)
}

/// Every event with its creator, newest first
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<EventWithCreator>>> {
    Ok(Json(service::list_all_events(&state.pool).await?))
}

/// Create an event owned by the caller's employee record
pub async fn create(
    State(state): State<AppState>,
    caller: CurrentEmployee,
    body: Result<Json<EventCreate>, JsonRejection>,
) -> AppResult<Json<CreateResponse>> {
    let payload = json_body(body)?;
    let event_id = service::create_event(
        &state.pool,
        caller.employee_id(),
        &payload,
        state.config.timezone,
    )
    .await?;
    Ok(Json(CreateResponse {
        success: true,
        event_id,
    }))
}

pub async fn update_status(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
    body: Result<Json<EventStatusUpdate>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    caller.require(Permission::EditEvents)?;
    let payload = json_body(body)?;
    let status = service::update_event_status(&state.pool, id, &payload.status).await?;
    Ok(Json(StatusResponse {
        success: true,
        status,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    caller.require(Permission::DeleteEvents)?;
    service::delete_event(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn stats(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<EventStats>> {
    caller.require(Permission::ViewReports)?;
    Ok(Json(service::event_stats(&state.pool, id).await?))
}
