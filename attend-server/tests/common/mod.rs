//! Test helpers: in-memory app, seeding and request shortcuts

#![allow(dead_code)]

use attend_server::db::employees::NewEmployee;
use attend_server::db::events::NewEvent;
use attend_server::{AppState, Config, api, db};
use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::models::{EmployeeType, EventStatus, EventType, RoleName};
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = AppState::in_memory(Config::default())
            .await
            .expect("in-memory database");
        let router = api::build_app(state.clone());
        Self { state, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("PATCH", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("DELETE", uri, token, None)).await
    }

    /// Insert an employee holding `roles`
    pub async fn seed_employee(&self, employee_id: &str, email: &str, roles: &[RoleName]) {
        let now = Utc::now().timestamp_millis();
        db::employees::create(
            &self.state.pool,
            &NewEmployee {
                employee_id,
                employee_type: EmployeeType::Teaching,
                grade: None,
                first_name: employee_id,
                last_name: "Tester",
                email,
                mobile: None,
                location: None,
            },
            now,
        )
        .await
        .unwrap();
        for role in roles {
            db::employees::assign_role(&self.state.pool, employee_id, *role, now)
                .await
                .unwrap();
        }
    }

    /// Sign up through the API and return the session token
    pub async fn sign_up(&self, email: &str) -> String {
        let res = self
            .post(
                "/api/auth/sign-up/email",
                None,
                serde_json::json!({ "name": "Test User", "email": email, "password": "password123" }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "sign-up failed: {}", res.body);
        res.body["token"].as_str().unwrap().to_string()
    }

    /// Employee with `roles` plus a signed-in linked user; returns the token
    pub async fn staff(&self, employee_id: &str, roles: &[RoleName]) -> String {
        let email = format!("{}@example.edu", employee_id.to_lowercase());
        self.seed_employee(employee_id, &email, roles).await;
        self.sign_up(&email).await
    }

    /// Insert an event directly and set its status
    pub async fn seed_event(
        &self,
        title: &str,
        event_type: EventType,
        date: DateTime<Utc>,
        status: EventStatus,
        created_by: &str,
    ) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = db::events::create(
            &self.state.pool,
            &NewEvent {
                event_type,
                event_date: date.timestamp_millis(),
                title,
                description: None,
                created_by,
            },
            now,
        )
        .await
        .unwrap();
        if status != EventStatus::Created {
            db::events::update_status(&self.state.pool, id, status, now)
                .await
                .unwrap();
        }
        id
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
