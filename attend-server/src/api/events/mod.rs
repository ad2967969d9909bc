//! Event API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/events", routes())
}

fn routes() -> Router<AppState> {
    // Public reads
    let read_routes = Router::new()
        .route("/", get(handler::list_buckets))
        .route("/all", get(handler::list_all));

    // Linked employee required; role checks happen in the handlers
    let write_routes = Router::new()
        .route("/create", post(handler::create))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}", delete(handler::delete))
        .route("/{id}/stats", get(handler::stats));

    read_routes.merge(write_routes)
}
