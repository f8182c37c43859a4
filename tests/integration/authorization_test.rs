//! Integration tests for the request authorization filter.

mod helpers;

use http::StatusCode;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_anonymous_request_to_protected_route_is_denied() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/user/info", None, None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Access denied!");
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_anonymous_request_to_error_page_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/error/404", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["data"]["status"], 404);
}

#[tokio::test]
async fn test_unknown_path_is_denied_before_routing() {
    let app = TestApp::new();
    let response = app.request("GET", "/nowhere", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_reaches_own_bucket_only() {
    let app = TestApp::new();
    let (access, _) = app.login("alice", PASSWORD).await;

    let info = app.request("GET", "/api/user/info", None, Some(&access)).await;
    assert_eq!(info.status, StatusCode::OK);
    assert_eq!(info.body["data"]["username"], "alice");
    assert_eq!(info.body["data"]["role"], "USER");
    assert!(info.body["data"].get("password_hash").is_none());

    let admin = app.request("GET", "/api/admin/info", None, Some(&access)).await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);

    let shared = app.request("GET", "/api/is_auth", None, Some(&access)).await;
    assert_eq!(shared.status, StatusCode::OK);
}

#[tokio::test]
async fn test_templated_pattern_binds_caller_id() {
    let app = TestApp::new();
    let (access, _) = app.login("alice", PASSWORD).await;

    // Permitted paths with no handler fall through to routing's 404.
    let own = app.request("GET", "/users/1/budget", None, Some(&access)).await;
    assert_eq!(own.status, StatusCode::NOT_FOUND);

    let other = app.request("GET", "/users/2/budget", None, Some(&access)).await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_reaches_admin_and_is_auth_buckets() {
    let app = TestApp::new();
    let (access, _) = app.login("root", PASSWORD).await;

    let admin = app.request("GET", "/api/admin/info", None, Some(&access)).await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["data"]["role"], "ADMIN");

    let shared = app.request("GET", "/api/is_auth", None, Some(&access)).await;
    assert_eq!(shared.status, StatusCode::OK);

    let user_only = app.request("GET", "/api/user/info", None, Some(&access)).await;
    assert_eq!(user_only.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_access_cookie_is_denied_but_error_pages_render() {
    let app = TestApp::new();
    let (access, _) = app.login("alice", PASSWORD).await;
    app.clock.advance(app.config.tokens.access_ttl_ms);

    let info = app.request("GET", "/api/is_auth", None, Some(&access)).await;
    assert_eq!(info.status, StatusCode::FORBIDDEN);

    let page = app.request("GET", "/error/500", None, Some(&access)).await;
    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_garbage_cookie_is_denied() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/is_auth", None, Some("x.y.z")).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_presented_token_is_not_checked_against_public_list() {
    let app = TestApp::new();
    let (access, _) = app.login("alice", PASSWORD).await;

    // `/auth/login` is public, but only for requests without a token.
    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": PASSWORD })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
