//! Page gate for non-API paths
//!
//! Only the presence of the session cookie is checked here; handlers
//! validate the session itself.
//! - `/admin`, `/staff`, `/dashboard` without the cookie redirect to
//!   `/login?redirect=<path>`
//! - `/login`, `/signup` with the cookie redirect to `redirect` or `/`

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use url::form_urlencoded;

use crate::auth::SESSION_COOKIE;
use crate::auth::session::cookie_value;

const PROTECTED_PREFIXES: &[&str] = &["/admin", "/staff", "/dashboard"];
const AUTH_PAGES: &[&str] = &["/login", "/signup"];

/// Plain string prefixes: `/administrator` is gated like `/admin`
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub fn is_auth_page(path: &str) -> bool {
    AUTH_PAGES.iter().any(|p| path.starts_with(p))
}

/// `/login?redirect=<path>` with the path percent-encoded
pub fn login_redirect(path: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", path)
        .finish();
    format!("/login?{query}")
}

/// Target of a signed-in visit to an auth page: the `redirect` parameter
/// when it is a local path, else `/`
pub fn after_login_target(query: Option<&str>) -> String {
    query
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == "redirect")
                .map(|(_, v)| v.into_owned())
        })
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .unwrap_or_else(|| "/".to_string())
}

pub async fn page_gate(req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if path.starts_with("/api/") || path == "/api" {
        return next.run(req).await;
    }

    let has_cookie = cookie_value(req.headers(), SESSION_COOKIE).is_some();

    if is_protected(path) && !has_cookie {
        return Redirect::temporary(&login_redirect(path)).into_response();
    }
    if is_auth_page(path) && has_cookie {
        return Redirect::temporary(&after_login_target(req.uri().query())).into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        assert!(is_protected("/admin"));
        assert!(is_protected("/admin/events"));
        assert!(is_protected("/dashboard/"));
        assert!(is_protected("/administrator"));
        assert!(is_protected("/staff-area"));
        assert!(!is_protected("/"));
        assert!(!is_protected("/events/admin"));
        assert!(is_auth_page("/signup"));
        assert!(is_auth_page("/login-help"));
        assert!(!is_auth_page("/api/login"));
    }

    #[test]
    fn test_login_redirect_encodes_path() {
        assert_eq!(login_redirect("/admin/events"), "/login?redirect=%2Fadmin%2Fevents");
    }

    #[test]
    fn test_after_login_target() {
        assert_eq!(after_login_target(Some("redirect=%2Fadmin%2Fevents")), "/admin/events");
        assert_eq!(after_login_target(Some("x=1")), "/");
        assert_eq!(after_login_target(None), "/");
        assert_eq!(after_login_target(Some("redirect=https%3A%2F%2Fevil.example")), "/");
        assert_eq!(after_login_target(Some("redirect=%2F%2Fevil.example")), "/");
    }
}
