//! Feedback API Module
//!
//! Public: participants submit feedback without signing in.

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/feedback/{code}", post(handler::submit))
}
