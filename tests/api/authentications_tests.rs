//! POST / PUT / DELETE /authentications

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_login_returns_both_tokens_and_stores_digest() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    assert!(!user.access_token.is_empty());
    assert!(!user.refresh_token.is_empty());
    assert_eq!(app.store.token_count(), 1);
    assert!(!app.store.stored_tokens().contains(&user.refresh_token));
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::new();

    let response = app
        .post(
            "/authentications",
            None,
            json!({ "username": "dicoding", "password": "secret" }),
        )
        .await;

    response.assert_fail(StatusCode::BAD_REQUEST, "username tidak ditemukan");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.user("dicoding").await;

    let response = app
        .post(
            "/authentications",
            None,
            json!({ "username": "dicoding", "password": "wrong" }),
        )
        .await;

    response.assert_fail(
        StatusCode::UNAUTHORIZED,
        "kredensial yang Anda masukkan salah",
    );
}

#[tokio::test]
async fn test_login_invalid_payload() {
    let app = TestApp::new();

    let missing = app
        .post("/authentications", None, json!({ "username": "dicoding" }))
        .await;
    missing.assert_fail(StatusCode::BAD_REQUEST, "harus mengirimkan username dan password");

    let wrong_type = app
        .post(
            "/authentications",
            None,
            json!({ "username": "dicoding", "password": 123 }),
        )
        .await;
    wrong_type.assert_fail(StatusCode::BAD_REQUEST, "username dan password harus string");
}

#[tokio::test]
async fn test_refresh_issues_usable_access_token() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    let response = app
        .put(
            "/authentications",
            None,
            Some(json!({ "refreshToken": user.refresh_token })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    let access_token = response.body["data"]["accessToken"].as_str().unwrap();

    let created = app
        .post(
            "/threads",
            Some(access_token),
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    let response = app
        .put(
            "/authentications",
            None,
            Some(json!({ "refreshToken": user.access_token })),
        )
        .await;

    response.assert_fail(StatusCode::BAD_REQUEST, "refresh token tidak valid");
}

#[tokio::test]
async fn test_refresh_missing_token() {
    let app = TestApp::new();

    let missing = app.put("/authentications", None, Some(json!({}))).await;
    missing.assert_fail(StatusCode::BAD_REQUEST, "harus mengirimkan token refresh");

    let wrong_type = app
        .put("/authentications", None, Some(json!({ "refreshToken": 1 })))
        .await;
    wrong_type.assert_fail(StatusCode::BAD_REQUEST, "refresh token harus string");
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let body = json!({ "refreshToken": user.refresh_token });

    let response = app
        .delete("/authentications", None, Some(body.clone()))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));
    assert_eq!(app.store.token_count(), 0);

    let refreshed = app.put("/authentications", None, Some(body.clone())).await;
    refreshed.assert_fail(
        StatusCode::BAD_REQUEST,
        "refresh token tidak ditemukan di database",
    );

    let again = app.delete("/authentications", None, Some(body)).await;
    again.assert_fail(
        StatusCode::BAD_REQUEST,
        "refresh token tidak ditemukan di database",
    );
}
