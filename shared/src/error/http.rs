//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::EventNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
            Self::NotAuthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            // an unlinked caller is a bad request, not an auth failure
            Self::EmployeeNotLinked
            | Self::ValidationFailed
            | Self::InvalidRequest
            | Self::PasswordTooShort
            | Self::InvalidEventType
            | Self::InvalidEventDate
            | Self::InvalidEventStatus
            | Self::InvalidParticipantType
            | Self::InvalidRating
            | Self::FeedbackNotCollected => StatusCode::BAD_REQUEST,
        }
    }
}
