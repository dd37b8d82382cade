//! POST .../comments/{comment_id}/replies and DELETE .../replies/{reply_id}

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_add_reply_returns_added_reply() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;

    let response = app
        .post(
            &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
            Some(&user.access_token),
            json!({ "content": "sebuah balasan" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.body["data"]["addedReply"];
    assert!(added["id"].as_str().unwrap().starts_with("reply-"));
    assert_eq!(added["content"], "sebuah balasan");
    assert_eq!(added["owner"], user.id.as_str());
}

#[tokio::test]
async fn test_add_reply_checks_thread_then_comment() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let missing_thread = app
        .post(
            "/threads/thread-xyz/comments/comment-xyz/replies",
            Some(&user.access_token),
            json!({ "content": "sebuah balasan" }),
        )
        .await;
    missing_thread.assert_fail(StatusCode::NOT_FOUND, "thread tidak ditemukan");

    let missing_comment = app
        .post(
            &format!("/threads/{}/comments/comment-xyz/replies", thread_id),
            Some(&user.access_token),
            json!({ "content": "sebuah balasan" }),
        )
        .await;
    missing_comment.assert_fail(StatusCode::NOT_FOUND, "komentar tidak ditemukan");
}

#[tokio::test]
async fn test_add_reply_invalid_payload() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;
    let uri = format!("/threads/{}/comments/{}/replies", thread_id, comment_id);

    let missing = app.post(&uri, Some(&user.access_token), json!({})).await;
    missing.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada",
    );

    let wrong_type = app
        .post(&uri, Some(&user.access_token), json!({ "content": ["a"] }))
        .await;
    wrong_type.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat balasan baru karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_delete_reply_masks_content() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;
    let reply_id = app.add_reply(&user, &thread_id, &comment_id).await;

    let response = app
        .delete(
            &format!(
                "/threads/{}/comments/{}/replies/{}",
                thread_id, comment_id, reply_id
            ),
            Some(&user.access_token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let thread = app.thread_detail(&thread_id).await;
    let reply = &thread["comments"][0]["replies"][0];
    assert_eq!(reply["id"], reply_id.as_str());
    assert_eq!(reply["content"], "**balasan telah dihapus**");
}

#[tokio::test]
async fn test_delete_reply_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let owner = app.user("dicoding").await;
    let other = app.user("johndoe").await;
    let thread_id = app.add_thread(&owner).await;
    let comment_id = app.add_comment(&owner, &thread_id).await;
    let reply_id = app.add_reply(&owner, &thread_id, &comment_id).await;

    let response = app
        .delete(
            &format!(
                "/threads/{}/comments/{}/replies/{}",
                thread_id, comment_id, reply_id
            ),
            Some(&other.access_token),
            None,
        )
        .await;

    response.assert_fail(
        StatusCode::FORBIDDEN,
        "anda tidak memiliki hak akses untuk balasan ini",
    );
}

#[tokio::test]
async fn test_delete_missing_reply() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;

    let response = app
        .delete(
            &format!("/threads/{}/comments/{}/replies/reply-xyz", thread_id, comment_id),
            Some(&user.access_token),
            None,
        )
        .await;

    response.assert_fail(StatusCode::NOT_FOUND, "balasan tidak ditemukan");
}
