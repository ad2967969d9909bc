//! Attendance check-in and feedback submission by event code

use shared::error::{AppError, ErrorCode};
use shared::models::{AttendanceCreate, FeedbackCreate, ParticipantType};
use sqlx::SqlitePool;

use super::events::resolve_code;
use crate::db;
use crate::error::ServiceResult;
use crate::util::now_millis;

fn participant_id(raw: &str) -> Result<&str, AppError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(
            AppError::validation("Participant id is required").with_detail("field", "participantId")
        );
    }
    Ok(id)
}

/// Record a check-in for the event addressed by `code`; returns the row id
pub async fn record_attendance(
    pool: &SqlitePool,
    code: &str,
    payload: &AttendanceCreate,
    recorded_by: &str,
) -> ServiceResult<i64> {
    let participant_id = participant_id(&payload.participant_id)?;
    let participant_type: ParticipantType = payload.participant_type.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidParticipantType)
            .with_detail("participantType", payload.participant_type.clone())
    })?;

    let event = resolve_code(pool, code).await?;
    let id = db::attendance::create(
        pool,
        event.event_id,
        participant_id,
        participant_type,
        recorded_by,
        now_millis(),
    )
    .await?;

    tracing::info!(
        event_id = event.event_id,
        participant_type = %participant_type,
        recorded_by,
        "Attendance recorded"
    );
    Ok(id)
}

/// Store a rating for the event addressed by `code`; returns the row id
///
/// Department meetings do not collect feedback.
pub async fn submit_feedback(
    pool: &SqlitePool,
    code: &str,
    payload: &FeedbackCreate,
) -> ServiceResult<i64> {
    let participant_id = participant_id(&payload.participant_id)?;
    if !payload.rating_in_range() {
        return Err(AppError::new(ErrorCode::InvalidRating)
            .with_detail("rating", payload.rating)
            .into());
    }

    let event = resolve_code(pool, code).await?;
    if !event.event_type.collects_feedback() {
        return Err(AppError::new(ErrorCode::FeedbackNotCollected)
            .with_detail("eventType", event.event_type.as_str())
            .into());
    }

    let comments = payload.trimmed_comments();
    let id = db::feedback::create(
        pool,
        event.event_id,
        participant_id,
        payload.rating,
        comments.as_deref(),
        now_millis(),
    )
    .await?;

    tracing::info!(event_id = event.event_id, rating = payload.rating, "Feedback received");
    Ok(id)
}
