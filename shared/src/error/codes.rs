//! Numeric error codes
//!
//! - 0xxx: request shape
//! - 1xxx: authentication
//! - 2xxx: permission
//! - 3xxx: employee link and sign-up
//! - 4xxx: events, attendance and feedback
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body
///
/// Serialized as a plain `u16`; the dashboard switches on the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    ValidationFailed = 2,
    NotFound = 3,
    /// Body or query could not be parsed
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,

    // ==================== 2xxx: Permission ====================
    /// Caller's highest role is below the operation's threshold
    PermissionDenied = 2001,

    // ==================== 3xxx: Employee ====================
    /// No session, or the session's user has no employee record
    EmployeeNotLinked = 3002,
    EmailAlreadyRegistered = 3003,
    PasswordTooShort = 3004,

    // ==================== 4xxx: Event ====================
    EventNotFound = 4001,
    InvalidEventType = 4002,
    InvalidEventDate = 4003,
    InvalidEventStatus = 4004,
    InvalidParticipantType = 4005,
    /// Rating outside 1..=5
    InvalidRating = 4006,
    /// Department meetings take no feedback
    FeedbackNotCollected = 4007,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::InvalidRequest,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::PermissionDenied,
        ErrorCode::EmployeeNotLinked,
        ErrorCode::EmailAlreadyRegistered,
        ErrorCode::PasswordTooShort,
        ErrorCode::EventNotFound,
        ErrorCode::InvalidEventType,
        ErrorCode::InvalidEventDate,
        ErrorCode::InvalidEventStatus,
        ErrorCode::InvalidParticipantType,
        ErrorCode::InvalidRating,
        ErrorCode::FeedbackNotCollected,
        ErrorCode::InternalError,
    ];

    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message, used as the `error` field unless overridden
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::NotAuthenticated => "Not signed in",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::EmployeeNotLinked => "User not linked to employee account",
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",
            ErrorCode::PasswordTooShort => "Password is too short",
            ErrorCode::EventNotFound => "Event not found",
            ErrorCode::InvalidEventType => "Invalid event type",
            ErrorCode::InvalidEventDate => "Invalid event date",
            ErrorCode::InvalidEventStatus => "Invalid event status",
            ErrorCode::InvalidParticipantType => "Invalid participant type",
            ErrorCode::InvalidRating => "Rating must be between 1 and 5",
            ErrorCode::FeedbackNotCollected => "Feedback is not collected for this event",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
