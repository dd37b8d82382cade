//! POST /users

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_register_returns_added_user() {
    let app = TestApp::new();

    let response = app
        .post(
            "/users",
            None,
            json!({
                "username": "dicoding",
                "password": "secret",
                "fullname": "Dicoding Indonesia"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    let added_user = &response.body["data"]["addedUser"];
    assert!(added_user["id"].as_str().unwrap().starts_with("user-"));
    assert_eq!(added_user["username"], "dicoding");
    assert_eq!(added_user["fullname"], "Dicoding Indonesia");
    assert!(added_user.get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_property() {
    let app = TestApp::new();

    let response = app
        .post(
            "/users",
            None,
            json!({ "username": "dicoding", "password": "secret" }),
        )
        .await;

    response.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
    );
}

#[tokio::test]
async fn test_register_wrong_type() {
    let app = TestApp::new();

    let response = app
        .post(
            "/users",
            None,
            json!({ "username": "dicoding", "password": "secret", "fullname": ["Dicoding"] }),
        )
        .await;

    response.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_register_username_too_long() {
    let app = TestApp::new();

    let response = app
        .post(
            "/users",
            None,
            json!({ "username": "d".repeat(51), "password": "secret", "fullname": "Dicoding" }),
        )
        .await;

    response.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena karakter username melebihi batas limit",
    );
}

#[tokio::test]
async fn test_register_username_with_forbidden_characters() {
    let app = TestApp::new();

    let response = app
        .post(
            "/users",
            None,
            json!({ "username": "dicoding indonesia", "password": "secret", "fullname": "Dicoding" }),
        )
        .await;

    response.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena username mengandung karakter terlarang",
    );
}

#[tokio::test]
async fn test_register_taken_username() {
    let app = TestApp::new();
    app.user("dicoding").await;

    let response = app
        .post(
            "/users",
            None,
            json!({ "username": "dicoding", "password": "other", "fullname": "Someone Else" }),
        )
        .await;

    response.assert_fail(StatusCode::BAD_REQUEST, "username tidak tersedia");
}

#[tokio::test]
async fn test_register_without_body() {
    let app = TestApp::new();

    let response = app
        .send(axum::http::Method::POST, "/users", None, None)
        .await;

    response.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
    );
}
