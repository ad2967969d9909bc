//! Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::employee::Employee;

wire_enum! {
    /// Kind of event
    EventType, UnknownEventType {
        DepartmentMeeting => "department-meeting",
        TechTalk => "techtalk",
        Workshop => "workshop",
    }
}

impl EventType {
    /// Label shown on dashboard cards
    pub const fn label(self) -> &'static str {
        match self {
            EventType::DepartmentMeeting => "Department Meeting",
            EventType::TechTalk => "Tech Talk",
            EventType::Workshop => "Workshop",
        }
    }

    /// Department meetings do not collect feedback
    pub const fn collects_feedback(self) -> bool {
        !matches!(self, EventType::DepartmentMeeting)
    }
}

wire_enum! {
    /// Stored lifecycle status. Not reconciled with the event date.
    EventStatus, UnknownEventStatus {
        Created => "created",
        InProgress => "inprogress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub event_type: EventType,
    pub event_date: DateTime<Utc>,
    pub event_title: String,
    pub event_description: Option<String>,
    pub event_status: EventStatus,
    pub event_delegated_to: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event joined with its creator (left join, so the creator may be missing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWithCreator {
    pub event: Event,
    pub creator: Option<Employee>,
}

/// Create event payload
///
/// Kept as raw strings so each bad field maps to its own error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_date: String,
    pub event_type: String,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStatusUpdate {
    pub status: String,
}

/// Upcoming bucket card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub datetime: DateTime<Utc>,
    pub duration: String,
    pub registered_count: i64,
    pub location: String,
    pub event_type: String,
}

/// In-progress bucket card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InProgressEvent {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub attendees_present: i64,
    pub total_registered: i64,
    pub event_type: String,
}

/// Past bucket card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastEvent {
    pub id: i64,
    pub code: String,
    pub title: String,
    /// Long-form date, e.g. "October 16, 2025"
    pub date: String,
    pub attendees: i64,
    pub rating: f64,
    pub max_rating: i64,
}

/// All three buckets, returned when no `type` filter is given
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBuckets {
    pub upcoming: Vec<UpcomingEvent>,
    pub in_progress: Vec<InProgressEvent>,
    pub past: Vec<PastEvent>,
}

/// Attendance and feedback totals for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub event_id: i64,
    pub attendance_count: i64,
    pub feedback_count: i64,
    pub average_rating: f64,
}
