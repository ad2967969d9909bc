//! Feedback API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::FeedbackCreate;

use crate::api::json_body;
use crate::services::participation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub feedback_id: i64,
}

pub async fn submit(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Json<FeedbackCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let payload = json_body(body)?;
    let feedback_id = participation::submit_feedback(&state.pool, &code, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            feedback_id,
        }),
    ))
}
