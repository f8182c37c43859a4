//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use budgetkeep_api::app::{build_app, build_state_with_clock};
use budgetkeep_auth::password::PasswordHasher;
use budgetkeep_core::config::{AppConfig, AuthorizationConfig, SeedUserConfig};
use budgetkeep_core::traits::ManualClock;

/// Start of every test's clock, in epoch milliseconds.
pub const START_MS: i64 = 1_700_000_000_000;

/// Password shared by every seeded test user.
pub const PASSWORD: &str = "correct horse battery staple";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock driving token issuance and expiry
    pub clock: Arc<ManualClock>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with `alice` (USER, id 1) and
    /// `root` (ADMIN, id 2).
    pub fn new() -> Self {
        let hash = PasswordHasher::new()
            .hash_password(PASSWORD)
            .expect("Failed to hash password");

        let mut config = AppConfig::default();
        config.tokens.secret = Some("integration-test-secret-".repeat(4));
        config.authorization = AuthorizationConfig {
            public_uris: "/auth/login,/error*".to_string(),
            user_uris: "/users/{id},/users/{id}/*,/api/user/info".to_string(),
            admin_uris: "/api/admin/*".to_string(),
            is_auth_uris: "/api/is_auth".to_string(),
            ..AuthorizationConfig::default()
        };
        config.users = vec![
            seed(1, "alice", &hash, "USER"),
            seed(2, "root", &hash, "ADMIN"),
        ];
        config.validate().expect("Test config is invalid");

        let clock = Arc::new(ManualClock::new(START_MS));
        let state =
            build_state_with_clock(config.clone(), clock.clone()).expect("Failed to build state");

        Self {
            router: build_app(state),
            clock,
            config,
        }
    }

    /// Log in and return `(access_token, refresh_token)`.
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        (
            response.data_str("access_token"),
            response.data_str("refresh_token"),
        )
    }

    /// Make an HTTP request to the test app, presenting `access_token` as
    /// the access cookie.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        access_token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, access_token).await
    }

    /// Like [`request`](Self::request) with an unparsed body.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        access_token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = access_token {
            req = req.header(
                header::COOKIE,
                format!("{}={}", self.config.cookies.access_name, token),
            );
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }
}

fn seed(id: i64, username: &str, hash: &str, role: &str) -> SeedUserConfig {
    SeedUserConfig {
        id,
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        password_hash: hash.to_string(),
        role: role.to_string(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// Reads a string field of `data`.
    pub fn data_str(&self, field: &str) -> String {
        self.body["data"][field]
            .as_str()
            .unwrap_or_else(|| panic!("No data.{field} in {:?}", self.body))
            .to_string()
    }

    /// The `code` of an error body.
    pub fn code(&self) -> Option<&str> {
        self.body["code"].as_str()
    }

    /// The `Set-Cookie` value for `name`, if any.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&prefix))
            .map(String::as_str)
    }
}
