//! Error codes and the error returned by every handler
//!
//! - [`ErrorCode`]: numeric code, decides the HTTP status
//! - [`ErrorCategory`]: code range (request, auth, permission, employee,
//!   event, system)
//! - [`AppError`]: code + message + optional details
//! - [`ErrorBody`]: `{error, code, details?}` written for every error response
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::EventNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::validation("Title is required").with_detail("field", "title");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
