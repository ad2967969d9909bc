//! Feedback Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// One rating per participant per event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFeedback {
    pub event_feedback_id: i64,
    pub event_id: i64,
    pub participant_id: String,
    pub rating: i64,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Feedback payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreate {
    pub participant_id: String,
    pub rating: i64,
    #[serde(default)]
    pub comments: Option<String>,
}

impl FeedbackCreate {
    pub fn rating_in_range(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// Comments with surrounding whitespace removed; blank becomes `None`
    pub fn trimmed_comments(&self) -> Option<String> {
        self.comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }
}
