//! Page gate redirects and public endpoints

mod common;

use axum::body::Body;
use common::TestApp;
use http::{Request, StatusCode, header};

fn page(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = cookie {
        builder = builder.header(header::COOKIE, format!("attendease.session_token={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn location(res: &common::TestResponse) -> &str {
    res.headers[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let app = TestApp::new().await;

    for (path, expected) in [
        ("/admin/events", "/login?redirect=%2Fadmin%2Fevents"),
        ("/staff", "/login?redirect=%2Fstaff"),
        ("/dashboard/reports", "/login?redirect=%2Fdashboard%2Freports"),
    ] {
        let res = app.send(page(path, None)).await;
        assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&res), expected);
    }
}

#[tokio::test]
async fn gate_matches_plain_prefixes() {
    let app = TestApp::new().await;

    for path in ["/adminpanel", "/administrator", "/dashboards", "/staff-area"] {
        let res = app.send(page(path, None)).await;
        assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert!(location(&res).starts_with("/login?redirect=%2F"), "{path}");
    }

    let res = app.send(page("/signup-complete", Some("tok"))).await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), "/");
}

#[tokio::test]
async fn cookie_presence_passes_the_gate() {
    let app = TestApp::new().await;
    // any value passes; the gate does not validate sessions
    let res = app.send(page("/admin/events", Some("whatever"))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn auth_pages_bounce_signed_in_visitors() {
    let app = TestApp::new().await;

    let res = app
        .send(page("/login?redirect=%2Fadmin%2Fevents", Some("tok")))
        .await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), "/admin/events");

    let res = app.send(page("/signup", Some("tok"))).await;
    assert_eq!(location(&res), "/");

    let res = app.send(page("/login", None)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_paths_are_not_gated() {
    let app = TestApp::new().await;
    let res = app.get("/api/events", None).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_service() {
    let app = TestApp::new().await;
    let res = app.get("/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["service"], "attend-server");
    assert!(res.headers.contains_key("x-request-id"));
}
