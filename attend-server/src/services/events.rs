//! Event queries, bucketing and lifecycle
//!
//! Buckets are derived from `event_date` against `now` plus the stored
//! status. The two can disagree (a `created` event whose date has passed is
//! in no bucket); nothing here reconciles them. The three bucket queries are
//! independent and not wrapped in a transaction.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, ErrorCode};
use shared::event_utils::event_slug;
use shared::models::feedback::MAX_RATING;
use shared::models::{
    Event, EventBuckets, EventCreate, EventStats, EventStatus, EventType, EventWithCreator,
    InProgressEvent, PastEvent, UpcomingEvent,
};
use shared::util::day_bounds;
use sqlx::SqlitePool;

use crate::db;
use crate::db::events::NewEvent;
use crate::error::ServiceResult;
use crate::util::now_millis;

pub const UPCOMING_DURATION: &str = "2 hours";
pub const UPCOMING_LOCATION: &str = "TBD";
pub const IN_PROGRESS_LOCATION: &str = "Lab 205";
/// Assumed length of a running event
pub const IN_PROGRESS_HOURS: i64 = 3;

// ==================== DTO builders ====================

pub fn to_upcoming(event: &Event) -> UpcomingEvent {
    UpcomingEvent {
        id: event.event_id,
        code: event_slug(&event.event_title),
        title: event.event_title.clone(),
        datetime: event.event_date,
        duration: UPCOMING_DURATION.to_string(),
        // no registration table exists
        registered_count: 0,
        location: UPCOMING_LOCATION.to_string(),
        event_type: event.event_type.label().to_string(),
    }
}

pub fn to_in_progress(event: &Event, attendees_present: i64) -> InProgressEvent {
    InProgressEvent {
        id: event.event_id,
        code: event_slug(&event.event_title),
        title: event.event_title.clone(),
        start_time: event.event_date,
        end_time: event.event_date + Duration::hours(IN_PROGRESS_HOURS),
        location: IN_PROGRESS_LOCATION.to_string(),
        attendees_present,
        total_registered: 0,
        event_type: event.event_type.label().to_string(),
    }
}

pub fn to_past(event: &Event, attendees: i64, rating: f64, tz: Tz) -> PastEvent {
    PastEvent {
        id: event.event_id,
        code: event_slug(&event.event_title),
        title: event.event_title.clone(),
        date: event
            .event_date
            .with_timezone(&tz)
            .format("%B %-d, %Y")
            .to_string(),
        attendees,
        rating,
        max_rating: MAX_RATING,
    }
}

// ==================== Buckets (logged and defaulted) ====================

pub async fn upcoming_events(pool: &SqlitePool, now: DateTime<Utc>) -> Vec<UpcomingEvent> {
    match db::events::upcoming(pool, now.timestamp_millis()).await {
        Ok(events) => events.iter().map(to_upcoming).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch upcoming events");
            Vec::new()
        }
    }
}

/// Events dated today (calendar day in `tz`) with status `inprogress`
pub async fn in_progress_events(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<InProgressEvent> {
    let (start, end) = day_bounds(now, tz);
    let events =
        match db::events::in_progress(pool, start.timestamp_millis(), end.timestamp_millis()).await
        {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch in-progress events");
                return Vec::new();
            }
        };

    let mut out = Vec::with_capacity(events.len());
    for event in &events {
        let present = attendance_count(pool, event.event_id).await;
        out.push(to_in_progress(event, present));
    }
    out
}

pub async fn past_events(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<PastEvent> {
    let events = match db::events::past(pool, now.timestamp_millis()).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch past events");
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(events.len());
    for event in &events {
        let attendees = attendance_count(pool, event.event_id).await;
        let rating = average_rating(pool, event.event_id).await;
        out.push(to_past(event, attendees, rating, tz));
    }
    out
}

/// All three buckets, queried concurrently
pub async fn all_buckets(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    tz: Tz,
) -> EventBuckets {
    let (upcoming, in_progress, past) = tokio::join!(
        upcoming_events(pool, now),
        in_progress_events(pool, now, tz),
        past_events(pool, now, tz),
    );
    EventBuckets {
        upcoming,
        in_progress,
        past,
    }
}

/// Attendance rows for an event; 0 on failure
pub async fn attendance_count(pool: &SqlitePool, event_id: i64) -> i64 {
    db::attendance::count(pool, event_id)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(event_id, error = %e, "Failed to count attendance");
            0
        })
}

/// Mean feedback rating; 0 when there is none or on failure
pub async fn average_rating(pool: &SqlitePool, event_id: i64) -> f64 {
    match db::feedback::average_rating(pool, event_id).await {
        Ok(avg) => avg.unwrap_or(0.0),
        Err(e) => {
            tracing::error!(event_id, error = %e, "Failed to average feedback rating");
            0.0
        }
    }
}

// ==================== Lifecycle ====================

/// Accepts RFC 3339 or a zone-less `YYYY-MM-DDTHH:MM[:SS]`, the latter read
/// in `tz`.
pub fn parse_event_date(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| naive.and_local_timezone(tz).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Validate a create payload into insertable fields
pub fn validate_create(
    payload: &EventCreate,
    tz: Tz,
) -> Result<(EventType, DateTime<Utc>), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Title is required").with_detail("field", "title"));
    }
    let event_type: EventType = payload.event_type.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidEventType).with_detail("eventType", payload.event_type.clone())
    })?;
    let event_date = parse_event_date(&payload.event_date, tz).ok_or_else(|| {
        AppError::new(ErrorCode::InvalidEventDate).with_detail("eventDate", payload.event_date.clone())
    })?;
    Ok((event_type, event_date))
}

/// Insert a new event with status `created`; returns its id
pub async fn create_event(
    pool: &SqlitePool,
    created_by: &str,
    payload: &EventCreate,
    tz: Tz,
) -> ServiceResult<i64> {
    let (event_type, event_date) = validate_create(payload, tz)?;
    let description = payload
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let new = NewEvent {
        event_type,
        event_date: event_date.timestamp_millis(),
        title: payload.title.trim(),
        description,
        created_by,
    };
    let event_id = db::events::create(pool, &new, now_millis()).await?;
    tracing::info!(event_id, created_by, event_type = %event_type, "Event created");
    Ok(event_id)
}

pub async fn list_all_events(pool: &SqlitePool) -> ServiceResult<Vec<EventWithCreator>> {
    Ok(db::events::list_with_creators(pool).await?)
}

pub async fn update_event_status(
    pool: &SqlitePool,
    event_id: i64,
    status: &str,
) -> ServiceResult<EventStatus> {
    let status: EventStatus = status.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidEventStatus).with_detail("status", status.to_string())
    })?;
    if !db::events::update_status(pool, event_id, status, now_millis()).await? {
        return Err(AppError::new(ErrorCode::EventNotFound).into());
    }
    tracing::info!(event_id, status = %status, "Event status updated");
    Ok(status)
}

pub async fn delete_event(pool: &SqlitePool, event_id: i64) -> ServiceResult<()> {
    if !db::events::delete(pool, event_id).await? {
        return Err(AppError::new(ErrorCode::EventNotFound).into());
    }
    tracing::info!(event_id, "Event deleted");
    Ok(())
}

pub async fn event_stats(pool: &SqlitePool, event_id: i64) -> ServiceResult<EventStats> {
    if db::events::find_by_id(pool, event_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::EventNotFound).into());
    }
    Ok(EventStats {
        event_id,
        attendance_count: db::attendance::count(pool, event_id).await?,
        feedback_count: db::feedback::count(pool, event_id).await?,
        average_rating: db::feedback::average_rating(pool, event_id)
            .await?
            .unwrap_or(0.0),
    })
}

/// Event addressed by its code, or `EventNotFound`
pub async fn resolve_code(pool: &SqlitePool, code: &str) -> ServiceResult<Event> {
    db::events::find_by_code(pool, code)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound).with_detail("code", code).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> Tz {
        chrono_tz::Asia::Kolkata
    }

    fn event(title: &str, date: DateTime<Utc>) -> Event {
        Event {
            event_id: 7,
            event_type: EventType::TechTalk,
            event_date: date,
            event_title: title.into(),
            event_description: None,
            event_status: EventStatus::Created,
            event_delegated_to: None,
            created_by: "CSE001".into(),
            created_at: date,
            updated_at: date,
        }
    }

    #[test]
    fn test_upcoming_defaults() {
        let date = Utc.with_ymd_and_hms(2025, 11, 3, 4, 30, 0).unwrap();
        let dto = to_upcoming(&event("Rust  Basics", date));
        assert_eq!(dto.code, "rust-basics");
        assert_eq!(dto.duration, "2 hours");
        assert_eq!(dto.location, "TBD");
        assert_eq!(dto.registered_count, 0);
        assert_eq!(dto.event_type, "Tech Talk");
        assert_eq!(dto.datetime, date);
    }

    #[test]
    fn test_in_progress_ends_three_hours_later() {
        let date = Utc.with_ymd_and_hms(2025, 11, 3, 4, 30, 0).unwrap();
        let dto = to_in_progress(&event("Lab Session", date), 12);
        assert_eq!(dto.end_time - dto.start_time, Duration::hours(3));
        assert_eq!(dto.location, "Lab 205");
        assert_eq!(dto.attendees_present, 12);
        assert_eq!(dto.total_registered, 0);
    }

    #[test]
    fn test_past_date_uses_business_zone() {
        // 20:00 UTC on Oct 15 is Oct 16 in IST
        let date = Utc.with_ymd_and_hms(2025, 10, 15, 20, 0, 0).unwrap();
        let dto = to_past(&event("Retro", date), 40, 4.5, ist());
        assert_eq!(dto.date, "October 16, 2025");
        assert_eq!(dto.max_rating, 5);
        assert_eq!(dto.rating, 4.5);
        assert_eq!(dto.attendees, 40);
    }

    #[test]
    fn test_parse_event_date() {
        let expected = Utc.with_ymd_and_hms(2025, 10, 20, 3, 30, 0).unwrap();
        assert_eq!(parse_event_date("2025-10-20T03:30:00Z", ist()), Some(expected));
        assert_eq!(parse_event_date("2025-10-20T09:00:00+05:30", ist()), Some(expected));
        assert_eq!(parse_event_date("2025-10-20T09:00", ist()), Some(expected));
        assert_eq!(parse_event_date("next tuesday", ist()), None);
    }

    #[test]
    fn test_validate_create_errors() {
        let payload = |title: &str, date: &str, kind: &str| EventCreate {
            title: title.into(),
            description: None,
            event_date: date.into(),
            event_type: kind.into(),
        };

        let err = validate_create(&payload("  ", "2025-10-20T09:00", "workshop"), ist()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = validate_create(&payload("A", "2025-10-20T09:00", "seminar"), ist()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEventType);

        let err = validate_create(&payload("A", "soon", "workshop"), ist()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEventDate);

        let (kind, _) = validate_create(&payload("A", "2025-10-20T09:00", "techtalk"), ist()).unwrap();
        assert_eq!(kind, EventType::TechTalk);
    }
}
