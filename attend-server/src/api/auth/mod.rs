//! Auth API Module
//!
//! Email+password sign-up and sign-in backed by database sessions.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up/email", post(handler::sign_up))
        .route("/sign-in/email", post(handler::sign_in))
        .route("/sign-out", post(handler::sign_out))
        .route("/get-session", get(handler::get_session))
}
