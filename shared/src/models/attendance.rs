//! Attendance Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    ParticipantType, UnknownParticipantType {
        Student => "student",
        Teaching => "teaching",
        NonTeaching => "non-teaching",
        External => "external",
    }
}

/// One check-in row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendance {
    pub id: i64,
    pub event_id: i64,
    /// Registration number, employee id or mobile number
    pub participant_id: String,
    pub participant_type: ParticipantType,
    pub created_by: String,
    pub creation_date: DateTime<Utc>,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub participant_id: String,
    pub participant_type: String,
}
