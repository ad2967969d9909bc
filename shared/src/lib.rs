//! Shared types for AttendEase
//!
//! Domain models, the role hierarchy and its permission predicates, error
//! codes and the HTTP error body. Used by the server and its tests.

pub mod error;
pub mod event_utils;
pub mod models;
pub mod permissions;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::role::{RoleName, highest_role};
pub use permissions::Permissions;
