//! HTTP API
//!
//! Every module exposes a `router()` mounted under its own prefix;
//! [`build_app`] adds the middleware stack.

pub mod attendance;
pub mod auth;
pub mod employees;
pub mod events;
pub mod feedback;
pub mod health;
pub mod me;

use axum::extract::rejection::JsonRejection;
use axum::middleware as axum_middleware;
use axum::{Json, Router};
use http::{HeaderName, HeaderValue};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(me::router())
        .merge(events::router())
        .merge(attendance::router())
        .merge(feedback::router())
        .merge(employees::router())
        .fallback(not_found)
}

/// Unwrap a JSON body, turning any rejection into a 400
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_request(rejection.body_text()))
}

/// No UI is served; unknown paths that pass the page gate are 404
async fn not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Routes plus middleware and state; used by the server and by tests
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(axum_middleware::from_fn(middleware::page_gate))
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
