//! Current user API

use axum::{Json, Router, routing::get};
use shared::models::CurrentUserView;

use crate::auth::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/me", get(me))
}

/// Caller's user, employee, roles, effective role, permissions and home page
pub async fn me(caller: CurrentUser) -> Json<CurrentUserView> {
    Json(CurrentUserView::from(caller.profile))
}
