//! Sign-up, sign-in, sessions and the current-user view

mod common;

use common::{TestApp, request};
use http::{StatusCode, header};
use serde_json::json;
use shared::models::RoleName;

#[tokio::test]
async fn sign_up_links_employee_by_email() {
    let app = TestApp::new().await;
    app.seed_employee("CSE020", "asha@example.edu", &[RoleName::Faculty, RoleName::Hod])
        .await;

    let res = app
        .post(
            "/api/auth/sign-up/email",
            None,
            json!({ "name": "Asha", "email": "Asha@Example.edu", "password": "password123" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["employeeId"], "CSE020");
    let cookie = res.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("attendease.session_token="));
    assert!(cookie.contains("HttpOnly"));

    let token = res.body["token"].as_str().unwrap();
    assert_eq!(token.len(), 32);

    let me = app.get("/api/me", Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["highestRole"], "hod");
    assert_eq!(me.body["roles"], json!(["faculty", "hod"]));
    assert_eq!(me.body["home"], "/dashboard");
    assert_eq!(me.body["permissions"]["canCreateEvents"], true);
    assert_eq!(me.body["permissions"]["canDeleteEvents"], false);
    assert_eq!(me.body["employee"]["employeeId"], "CSE020");
}

#[tokio::test]
async fn unlinked_user_has_no_role() {
    let app = TestApp::new().await;
    let token = app.sign_up("guest@example.edu").await;

    let me = app.get("/api/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert!(me.body["highestRole"].is_null());
    assert!(me.body["employee"].is_null());
    assert_eq!(me.body["home"], "/login");
    assert_eq!(me.body["permissions"]["canViewEvents"], false);
}

#[tokio::test]
async fn sign_up_validation() {
    let app = TestApp::new().await;
    app.sign_up("taken@example.edu").await;

    let res = app
        .post(
            "/api/auth/sign-up/email",
            None,
            json!({ "name": "Again", "email": "taken@example.edu", "password": "password123" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body["code"], 3003);

    let res = app
        .post(
            "/api/auth/sign-up/email",
            None,
            json!({ "name": "Short", "email": "short@example.edu", "password": "abc" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 3004);
    assert_eq!(app.count("attendease_user").await, 1);
}

#[tokio::test]
async fn sign_in_checks_password() {
    let app = TestApp::new().await;
    app.sign_up("ravi@example.edu").await;

    let res = app
        .post(
            "/api/auth/sign-in/email",
            None,
            json!({ "email": "ravi@example.edu", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["code"], 1002);

    let res = app
        .post(
            "/api/auth/sign-in/email",
            None,
            json!({ "email": "nobody@example.edu", "password": "password123" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["code"], 1002);

    let res = app
        .post(
            "/api/auth/sign-in/email",
            None,
            json!({ "email": "ravi@example.edu", "password": "password123" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(app.count("attendease_session").await, 2);
}

#[tokio::test]
async fn session_cookie_authenticates() {
    let app = TestApp::new().await;
    let token = app.sign_up("cookie@example.edu").await;

    let req = http::Request::builder()
        .uri("/api/auth/get-session")
        .header(header::COOKIE, format!("attendease.session_token={token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.send(req).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["email"], "cookie@example.edu");
    assert!(res.body["expiresAt"].is_string());
}

#[tokio::test]
async fn get_session_without_token_is_null() {
    let app = TestApp::new().await;
    let res = app.get("/api/auth/get-session", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.is_null());

    let res = app.get("/api/auth/get-session", Some("not-a-real-token")).await;
    assert!(res.body.is_null());

    let res = app.get("/api/me", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sign_out_ends_session() {
    let app = TestApp::new().await;
    let token = app.sign_up("bye@example.edu").await;

    let res = app
        .send(request("POST", "/api/auth/sign-out", Some(&token), None))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(
        res.headers[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );

    let me = app.get("/api/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn employees_list_needs_manage_permission() {
    let app = TestApp::new().await;
    let ccc = app.staff("CCC001", &[RoleName::Ccc]).await;
    let hod = app.staff("HOD001", &[RoleName::Hod]).await;
    app.seed_employee("AAA001", "aaa@example.edu", &[]).await;

    let res = app.get("/api/employees", Some(&ccc)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.get("/api/employees", Some(&hod)).await;
    assert_eq!(res.status, StatusCode::OK);
    let list = res.body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    // ordered by first name
    assert_eq!(list[0]["employee"]["employeeId"], "AAA001");
    assert_eq!(list[2]["roles"][0]["roleName"], "hod");
    // seeded roles carry epoch millis, served as an RFC 3339 timestamp
    assert_eq!(list[2]["roles"][0]["createdAt"], "1970-01-01T00:00:00Z");
}

#[tokio::test]
async fn late_link_grants_employee_roles() {
    use attend_server::services::employees;

    let app = TestApp::new().await;
    let token = app.sign_up("late@example.edu").await;
    app.seed_employee("CLK009", "clerk9@example.edu", &[RoleName::Clerk])
        .await;

    let me = app.get("/api/me", Some(&token)).await;
    assert!(me.body["highestRole"].is_null());
    let user_id = me.body["user"]["id"].as_str().unwrap().to_string();

    let pool = &app.state.pool;
    assert!(!employees::link_user_to_employee(pool, &user_id, "NOPE01").await.unwrap());
    assert!(employees::link_user_to_employee(pool, &user_id, "CLK009").await.unwrap());

    let me = app.get("/api/me", Some(&token)).await;
    assert_eq!(me.body["highestRole"], "clerk");
    assert_eq!(me.body["permissions"]["canRecordAttendance"], true);
    assert_eq!(me.body["home"], "/dashboard");
}
