//! Integration tests for login and refresh.

mod helpers;

use http::StatusCode;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success_sets_body_and_cookies() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access = response.data_str("access_token");
    assert!(!response.data_str("refresh_token").is_empty());
    assert!(response.body["error"].is_null());

    let access_cookie = response.cookie("accessToken").expect("No access cookie");
    assert!(access_cookie.starts_with(&format!("accessToken={access}")));
    assert!(access_cookie.contains("HttpOnly"));
    assert!(access_cookie.contains("Max-Age=1000000"));
    assert!(response.cookie("refreshToken").is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": "nope" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "username": "mallory", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.code(), Some("AUTHENTICATION_FAILED"));
    assert!(wrong_password.cookie("accessToken").is_none());
}

#[tokio::test]
async fn test_login_with_malformed_body_is_rejected() {
    let app = TestApp::new();
    let response = app
        .raw_request("POST", "/auth/login", "{\"username\":".to_string(), None)
        .await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_refresh_issues_new_pair() {
    let app = TestApp::new();
    let (access, refresh) = app.login("alice", PASSWORD).await;

    app.clock.advance(1_000);
    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": refresh })),
            Some(&access),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let new_access = response.data_str("access_token");
    assert_ne!(new_access, access);
    assert!(response.cookie("accessToken").is_some());

    let info = app.request("GET", "/api/user/info", None, Some(&new_access)).await;
    assert_eq!(info.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_endpoint_skips_cookie_decoding() {
    let app = TestApp::new();
    let (_, refresh) = app.login("alice", PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": refresh })),
            Some("not-a-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_refresh_rejected_once_access_window_has_passed() {
    let app = TestApp::new();
    let (access, refresh) = app.login("alice", PASSWORD).await;

    // The refresh token itself is still valid here.
    app.clock.advance(app.config.tokens.access_ttl_ms + 1_000);
    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": refresh })),
            Some(&access),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.code(), Some("ACCESS_WINDOW_EXPIRED"));
}

#[tokio::test]
async fn test_refresh_rejects_expired_refresh_token() {
    let app = TestApp::new();
    let (access, refresh) = app.login("alice", PASSWORD).await;

    app.clock.advance(app.config.tokens.refresh_ttl_ms);
    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": refresh })),
            Some(&access),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.code(), Some("REFRESH_TOKEN_EXPIRED"));
}

#[tokio::test]
async fn test_access_token_cannot_be_used_to_refresh() {
    let app = TestApp::new();
    let (access, _) = app.login("alice", PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": access })),
            Some(&access),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.code(), Some("INVALID_TOKEN"));
}

#[tokio::test]
async fn test_refresh_without_access_cookie_is_halted() {
    let app = TestApp::new();
    let (_, refresh) = app.login("alice", PASSWORD).await;

    // The refresh endpoint is not public; it is only exempt from decoding.
    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "token": refresh })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Access denied!");
}
