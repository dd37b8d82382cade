//! POST /threads and GET /threads/{thread_id}

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_add_thread_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .post(
            "/threads",
            None,
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await;

    response.assert_fail(StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_add_thread_rejects_garbage_token() {
    let app = TestApp::new();

    let response = app
        .post(
            "/threads",
            Some("not-a-token"),
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await;

    response.assert_fail(StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_add_thread_returns_added_thread() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    let response = app
        .post(
            "/threads",
            Some(&user.access_token),
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], user.id.as_str());
}

#[tokio::test]
async fn test_add_thread_invalid_payload() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    let missing = app
        .post(
            "/threads",
            Some(&user.access_token),
            json!({ "title": "sebuah thread" }),
        )
        .await;
    missing.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada",
    );

    let wrong_type = app
        .post(
            "/threads",
            Some(&user.access_token),
            json!({ "title": "sebuah thread", "body": true }),
        )
        .await;
    wrong_type.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat thread baru karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_get_thread_not_found() {
    let app = TestApp::new();

    let response = app.get("/threads/thread-xyz").await;

    response.assert_fail(StatusCode::NOT_FOUND, "thread tidak ditemukan");
}

#[tokio::test]
async fn test_get_thread_without_comments_omits_comments() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let thread = app.thread_detail(&thread_id).await;

    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());
    assert!(thread.get("comments").is_none());
}

#[tokio::test]
async fn test_get_thread_nests_comments_replies_and_likes() {
    let app = TestApp::new();
    let author = app.user("dicoding").await;
    let reader = app.user("johndoe").await;
    let thread_id = app.add_thread(&author).await;

    let first = app.add_comment(&reader, &thread_id).await;
    let second = app.add_comment(&author, &thread_id).await;
    let reply = app.add_reply(&author, &thread_id, &first).await;
    app.put(
        &format!("/threads/{}/comments/{}/likes", thread_id, first),
        Some(&author.access_token),
        None,
    )
    .await;

    let thread = app.thread_detail(&thread_id).await;
    let comments = thread["comments"].as_array().unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "sebuah comment");
    assert_eq!(comments[0]["likeCount"], 1);
    assert_eq!(
        comments[0]["replies"][0]["id"],
        json!(reply),
    );
    assert_eq!(comments[0]["replies"][0]["username"], "dicoding");
    assert_eq!(comments[0]["replies"][0]["content"], "sebuah balasan");

    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["likeCount"], 0);
    assert!(comments[1].get("replies").is_none());
}
