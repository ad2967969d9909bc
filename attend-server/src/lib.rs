//! attend-server: AttendEase event, attendance and feedback service
//!
//! HTTP/JSON API over SQLite. Employees hold roles in a fixed hierarchy;
//! every role-gated operation checks the caller's highest role against the
//! predicates in [`shared::permissions`].

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod services;
pub mod state;
pub mod util;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
